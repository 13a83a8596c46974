//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Document database configuration.
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseSettings {
    /// Connection string (may embed credentials)
    pub connection_string: String,
    pub database_name: String,
    pub player_collection_name: String,
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("connection_string", &"[REDACTED]")
            .field("database_name", &self.database_name)
            .field("player_collection_name", &self.player_collection_name)
            .finish()
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            connection_string: "mongodb://localhost:27017".to_string(),
            database_name: "gc_broadcasting".to_string(),
            player_collection_name: "players".to_string(),
        }
    }
}
