//! Database connection and initialization.

use mongodb::{bson::doc, Client, Database as MongoDatabase};

use common::{AppResult, DatabaseSettings};
use domain::Player;

use crate::repository::MongoPlayerCollection;

/// Database wrapper for connection management.
///
/// Created once at startup and shared; the underlying client pools its own
/// connections and is cheap to clone.
#[derive(Clone)]
pub struct Database {
    database: MongoDatabase,
    player_collection_name: String,
}

impl Database {
    /// Initialize the client and select the configured database.
    pub async fn connect(settings: &DatabaseSettings) -> AppResult<Self> {
        let client = Client::with_uri_str(&settings.connection_string).await?;
        let database = client.database(&settings.database_name);
        tracing::info!(
            database = %settings.database_name,
            collection = %settings.player_collection_name,
            "Database client initialised"
        );

        Ok(Self {
            database,
            player_collection_name: settings.player_collection_name.clone(),
        })
    }

    /// Typed handle to the player collection.
    pub fn player_collection(&self) -> MongoPlayerCollection {
        MongoPlayerCollection::new(
            self.database.collection::<Player>(&self.player_collection_name),
        )
    }

    /// Check database connectivity with the `ping` command.
    pub async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
