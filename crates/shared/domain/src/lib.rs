//! Domain layer - Core player entity and value objects.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! Storage adapters translate these types into documents.

pub mod constants;
pub mod player;

pub use constants::*;
pub use player::{Player, PlayerUpdate};
