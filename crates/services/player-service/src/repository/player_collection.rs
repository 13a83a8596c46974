//! Storage seam over the player document collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::Document;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::Collection;

use common::{AppError, AppResult};
use domain::Player;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Server error code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Counts reported by a single-document update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Documents matching the filter
    pub matched: u64,
    /// Documents whose stored values actually changed
    pub modified: u64,
}

/// Document collection operations needed by the player repository.
///
/// Filters and updates are plain documents so the repository owns query
/// construction and any backend can evaluate them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlayerCollection: Send + Sync {
    /// Insert one player document as-is
    async fn insert_one(&self, player: &Player) -> AppResult<()>;

    /// First document matching the filter, in natural order
    async fn find_one(&self, filter: Document) -> AppResult<Option<Player>>;

    /// All documents matching the filter, in natural order
    async fn find(&self, filter: Document) -> AppResult<Vec<Player>>;

    /// Apply an update document to the first match
    async fn update_one(&self, filter: Document, update: Document) -> AppResult<UpdateOutcome>;

    /// Delete the first match, returning the deleted count
    async fn delete_one(&self, filter: Document) -> AppResult<u64>;
}

/// MongoDB implementation of PlayerCollection
#[derive(Clone)]
pub struct MongoPlayerCollection {
    collection: Collection<Player>,
}

impl MongoPlayerCollection {
    /// Wrap a typed collection handle
    pub fn new(collection: Collection<Player>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl PlayerCollection for MongoPlayerCollection {
    async fn insert_one(&self, player: &Player) -> AppResult<()> {
        self.collection
            .insert_one(player)
            .await
            .map_err(|e| map_write_error(e, &player.id))?;
        Ok(())
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<Player>> {
        let player = self.collection.find_one(filter).await?;
        Ok(player)
    }

    async fn find(&self, filter: Document) -> AppResult<Vec<Player>> {
        let cursor = self.collection.find(filter).await?;
        let players: Vec<Player> = cursor.try_collect().await?;
        Ok(players)
    }

    async fn update_one(&self, filter: Document, update: Document) -> AppResult<UpdateOutcome> {
        let result = self.collection.update_one(filter, update).await?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_one(&self, filter: Document) -> AppResult<u64> {
        let result = self.collection.delete_one(filter).await?;
        Ok(result.deleted_count)
    }
}

/// Duplicate `_id` becomes a conflict; everything else stays a database error.
fn map_write_error(err: MongoError, player_id: &str) -> AppError {
    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
        if write_error.code == DUPLICATE_KEY_CODE {
            return AppError::conflict(format!("Player {}", player_id));
        }
    }
    AppError::Database(err)
}
