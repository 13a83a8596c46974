//! Repository layer for data access.

mod player_collection;
mod player_repository;

pub use player_collection::{MongoPlayerCollection, PlayerCollection, UpdateOutcome};
pub use player_repository::{PlayerRepo, PlayerRepository};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use player_collection::MockPlayerCollection;
#[cfg(any(test, feature = "test-utils"))]
pub use player_repository::MockPlayerRepo;
