//! Domain types and validation rules shared by the db and api crates.

pub mod error;
pub mod types;
pub mod users;
