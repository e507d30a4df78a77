// Service exports
pub mod auth;
pub mod postgres;
pub mod seed;

pub use auth::{hash_password, issue_token, verify_password};
pub use postgres::{PostgresClient, PostgresError};
pub use seed::seed_database;
