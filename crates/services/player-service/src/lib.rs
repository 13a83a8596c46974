//! Player Service Library
//!
//! Data access for player documents stored in MongoDB. The `PlayerRepo`
//! trait is the capability handed to outer layers; `PlayerRepository` is its
//! implementation over a shared collection handle.

pub mod cli;
pub mod config;
pub mod infra;
pub mod repository;

use tracing::info;

use common::AppResult;

use crate::config::PlayerServiceConfig;
use crate::infra::Database;
use crate::repository::PlayerRepository;

pub use repository::{PlayerCollection, PlayerRepo};

/// Connect to the configured database and build the repository.
pub async fn connect(config: &PlayerServiceConfig) -> AppResult<(Database, PlayerRepository)> {
    let db = Database::connect(&config.database).await?;
    let repo = PlayerRepository::from_database(&db);
    info!(config = ?config.database, "Player repository ready");

    Ok((db, repo))
}
