//! HTTP request handlers.

pub mod users;
