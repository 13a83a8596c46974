//! Player repository implementation over a document collection.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{self, doc, Bson, Document};
use tokio_util::sync::CancellationToken;

use common::{AppError, AppResult};
use domain::{is_valid_team_id, Player, PlayerUpdate, FIELD_ID, FIELD_NAME, FIELD_TEAM_ID};

use super::player_collection::PlayerCollection;
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Player repository trait for dependency injection.
///
/// Every operation checks the cancellation token before touching storage and
/// races the storage call against it. Absence is reported as `false` or
/// `None`, never as an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    /// Insert a fully formed player, including its id
    async fn create_player(&self, player: &Player, ct: &CancellationToken) -> AppResult<bool>;

    /// Delete a player by id; `false` when nothing was deleted
    async fn delete_player(&self, player_id: &str, ct: &CancellationToken) -> AppResult<bool>;

    /// First player with the given name
    async fn get_player(&self, name: &str, ct: &CancellationToken) -> AppResult<Option<Player>>;

    /// All players of a team; non-positive team ids yield an empty list
    async fn get_players(&self, team_id: i32, ct: &CancellationToken) -> AppResult<Vec<Player>>;

    /// Overwrite every updatable field of an existing player.
    ///
    /// `false` when the id is unknown or no stored value changed.
    async fn update_player(&self, new_details: &Player, ct: &CancellationToken)
        -> AppResult<bool>;
}

/// Concrete implementation of PlayerRepo
pub struct PlayerRepository {
    collection: Arc<dyn PlayerCollection>,
}

impl PlayerRepository {
    /// Create new repository instance
    pub fn new(collection: Arc<dyn PlayerCollection>) -> Self {
        Self { collection }
    }

    /// Create a repository on the configured player collection
    pub fn from_database(db: &Database) -> Self {
        Self::new(Arc::new(db.player_collection()))
    }
}

#[async_trait]
impl PlayerRepo for PlayerRepository {
    #[tracing::instrument(level = "debug", skip_all, fields(player_id = %player.id))]
    async fn create_player(&self, player: &Player, ct: &CancellationToken) -> AppResult<bool> {
        ensure_active(ct)?;

        until_cancelled(ct, self.collection.insert_one(player)).await?;
        tracing::debug!("player created");
        Ok(true)
    }

    #[tracing::instrument(level = "debug", skip(self, ct))]
    async fn delete_player(&self, player_id: &str, ct: &CancellationToken) -> AppResult<bool> {
        ensure_active(ct)?;

        let filter = eq_filter(FIELD_ID, player_id);
        let deleted = until_cancelled(ct, self.collection.delete_one(filter)).await?;
        tracing::debug!(deleted, "delete acknowledged");

        Ok(deleted > 0)
    }

    #[tracing::instrument(level = "debug", skip(self, ct))]
    async fn get_player(&self, name: &str, ct: &CancellationToken) -> AppResult<Option<Player>> {
        ensure_active(ct)?;

        let filter = eq_filter(FIELD_NAME, name);
        until_cancelled(ct, self.collection.find_one(filter)).await
    }

    #[tracing::instrument(level = "debug", skip(self, ct))]
    async fn get_players(&self, team_id: i32, ct: &CancellationToken) -> AppResult<Vec<Player>> {
        ensure_active(ct)?;

        if !is_valid_team_id(team_id) {
            return Ok(Vec::new());
        }

        let filter = eq_filter(FIELD_TEAM_ID, team_id);
        let players = until_cancelled(ct, self.collection.find(filter)).await?;
        tracing::debug!(count = players.len(), "players found");

        Ok(players)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(player_id = %new_details.id))]
    async fn update_player(
        &self,
        new_details: &Player,
        ct: &CancellationToken,
    ) -> AppResult<bool> {
        ensure_active(ct)?;

        let filter = eq_filter(FIELD_ID, new_details.id.as_str());
        let existing = until_cancelled(ct, self.collection.find_one(filter.clone())).await?;
        if existing.is_none() {
            tracing::debug!("player not found, nothing updated");
            return Ok(false);
        }

        let update = set_document(&new_details.updatable_fields())?;
        let outcome = until_cancelled(ct, self.collection.update_one(filter, update)).await?;
        tracing::debug!(
            matched = outcome.matched,
            modified = outcome.modified,
            "update applied"
        );

        Ok(outcome.modified > 0)
    }
}

/// Fail fast when the caller already gave up.
fn ensure_active(ct: &CancellationToken) -> AppResult<()> {
    if ct.is_cancelled() {
        return Err(AppError::Cancelled);
    }
    Ok(())
}

/// Drive a storage call unless the token fires first.
async fn until_cancelled<T, F>(ct: &CancellationToken, call: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    tokio::select! {
        biased;
        _ = ct.cancelled() => Err(AppError::Cancelled),
        result = call => result,
    }
}

fn eq_filter(field: &str, value: impl Into<Bson>) -> Document {
    let mut filter = Document::new();
    filter.insert(field, value);
    filter
}

/// Render the updatable fields as a `$set` update document.
fn set_document(fields: &PlayerUpdate) -> AppResult<Document> {
    let set = bson::to_document(fields)
        .map_err(|e| AppError::internal(format!("failed to encode player update: {}", e)))?;
    Ok(doc! { "$set": set })
}
