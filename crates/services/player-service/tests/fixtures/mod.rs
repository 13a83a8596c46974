//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{self, Document};

use common::{AppError, AppResult};
use domain::Player;
use player_service_lib::repository::{PlayerCollection, UpdateOutcome};

/// In-memory collection with equality filters and `$set` updates.
///
/// Documents keep insertion order, and the modified count only counts
/// updates that change a stored value, matching the server.
#[derive(Default)]
pub struct InMemoryPlayerCollection {
    documents: Mutex<Vec<Document>>,
    calls: AtomicUsize,
}

impl InMemoryPlayerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of storage calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    /// Store a document as written by another client, bypassing `Player`
    pub fn insert_raw(&self, document: Document) {
        self.documents.lock().unwrap().push(document);
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

fn decode(document: &Document) -> AppResult<Player> {
    bson::from_document(document.clone()).map_err(|e| AppError::internal(e.to_string()))
}

#[async_trait]
impl PlayerCollection for InMemoryPlayerCollection {
    async fn insert_one(&self, player: &Player) -> AppResult<()> {
        self.record_call();
        let document = bson::to_document(player).map_err(|e| AppError::internal(e.to_string()))?;

        let mut documents = self.documents.lock().unwrap();
        if documents
            .iter()
            .any(|existing| existing.get("_id") == document.get("_id"))
        {
            return Err(AppError::conflict(format!("Player {}", player.id)));
        }
        documents.push(document);
        Ok(())
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<Player>> {
        self.record_call();
        let documents = self.documents.lock().unwrap();
        documents
            .iter()
            .find(|document| matches(document, &filter))
            .map(decode)
            .transpose()
    }

    async fn find(&self, filter: Document) -> AppResult<Vec<Player>> {
        self.record_call();
        let documents = self.documents.lock().unwrap();
        documents
            .iter()
            .filter(|document| matches(document, &filter))
            .map(decode)
            .collect()
    }

    async fn update_one(&self, filter: Document, update: Document) -> AppResult<UpdateOutcome> {
        self.record_call();
        let set = update
            .get_document("$set")
            .map_err(|e| AppError::internal(e.to_string()))?;

        let mut documents = self.documents.lock().unwrap();
        let Some(document) = documents
            .iter_mut()
            .find(|document| matches(document, &filter))
        else {
            return Ok(UpdateOutcome::default());
        };

        let mut changed = false;
        for (key, value) in set {
            if document.get(key) != Some(value) {
                document.insert(key.clone(), value.clone());
                changed = true;
            }
        }

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(changed),
        })
    }

    async fn delete_one(&self, filter: Document) -> AppResult<u64> {
        self.record_call();
        let mut documents = self.documents.lock().unwrap();
        match documents
            .iter()
            .position(|document| matches(document, &filter))
        {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

pub fn create_test_player(id: &str, name: &str, team_id: i32) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        position: "Defender".to_string(),
        assists: 2,
        year: 3,
        branch: "MECH".to_string(),
        college_id: 41,
        goals: 1,
        imagelink: "https://img.example.com/player.png".to_string(),
        instagram: "@defender".to_string(),
        age: 22,
        team_id,
    }
}
