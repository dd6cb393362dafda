//! Repository-level tests for users and posts against an ephemeral
//! SQLite database.

use inkpost_db::models::post::CreatePost;
use inkpost_db::repositories::{PostRepo, UserRepo};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "./migrations")]
async fn create_and_find_user(pool: SqlitePool) {
    let created = UserRepo::create(&pool, "ada").await.unwrap();
    assert_eq!(created.name, "ada");

    let found = UserRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.unwrap().name, "ada");

    let missing = UserRepo::find_by_id(&pool, created.id + 1).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_returns_users_in_id_order(pool: SqlitePool) {
    UserRepo::create(&pool, "brian").await.unwrap();
    UserRepo::create(&pool, "ada").await.unwrap();

    let users = UserRepo::list(&pool).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "brian");
    assert_eq!(users[1].name, "ada");
    assert!(users[0].id < users[1].id);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_user_name_violates_unique_constraint(pool: SqlitePool) {
    UserRepo::create(&pool, "ada").await.unwrap();

    let err = UserRepo::create(&pool, "ada").await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn posts_attach_to_their_owner(pool: SqlitePool) {
    let ada = UserRepo::create(&pool, "ada").await.unwrap();
    let brian = UserRepo::create(&pool, "brian").await.unwrap();

    for title in ["notes", "memo"] {
        PostRepo::create(
            &pool,
            &CreatePost {
                title: title.to_string(),
                content: "text".to_string(),
                user_id: ada.id,
            },
        )
        .await
        .unwrap();
    }

    let ada_posts = PostRepo::list_by_user(&pool, ada.id).await.unwrap();
    assert_eq!(ada_posts.len(), 2);
    assert_eq!(ada_posts[0].title, "notes");

    let brian_posts = PostRepo::list_by_user(&pool, brian.id).await.unwrap();
    assert!(brian_posts.is_empty());

    let all = PostRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn post_without_existing_owner_is_rejected(pool: SqlitePool) {
    let err = PostRepo::create(
        &pool,
        &CreatePost {
            title: "orphan".to_string(),
            content: "text".to_string(),
            user_id: 999,
        },
    )
    .await
    .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_foreign_key_violation()),
        other => panic!("expected a database error, got {other:?}"),
    }
}
