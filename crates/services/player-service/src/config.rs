//! Player service configuration.

use std::env;

use common::DatabaseSettings;

/// Player service configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayerServiceConfig {
    /// Document database settings
    pub database: DatabaseSettings,
}

impl PlayerServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseSettings::default();

        Self {
            database: DatabaseSettings {
                connection_string: lookup("PLAYER_SERVICE_DATABASE_URL")
                    .or_else(|| lookup("MONGODB_URI"))
                    .unwrap_or(defaults.connection_string),
                database_name: lookup("PLAYER_SERVICE_DATABASE_NAME")
                    .unwrap_or(defaults.database_name),
                player_collection_name: lookup("PLAYER_SERVICE_PLAYER_COLLECTION")
                    .unwrap_or(defaults.player_collection_name),
            },
        }
    }
}
