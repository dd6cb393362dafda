//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod post_repo;
pub mod user_repo;

pub use post_repo::PostRepo;
pub use user_repo::UserRepo;
