//! Infrastructure layer - document database connection.

mod db;

pub use db::Database;
