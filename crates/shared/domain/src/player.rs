//! Player domain entity and related types.

use serde::{Deserialize, Deserializer, Serialize};

/// Player domain entity.
///
/// Serialized with PascalCase field names and the identity stored as `_id`.
/// Missing fields, and text fields stored as `null`, fall back to their zero
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Player {
    /// Opaque unique identifier, supplied by the caller at creation
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub position: String,
    pub assists: i32,
    pub year: i32,
    #[serde(deserialize_with = "null_as_empty")]
    pub branch: String,
    pub college_id: i32,
    pub goals: i32,
    /// Profile image URL
    #[serde(deserialize_with = "null_as_empty")]
    pub imagelink: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub instagram: String,
    pub age: i32,
    /// Owning team (foreign key, not enforced)
    pub team_id: i32,
}

/// Decode a nullable text field, reading `null` as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Player {
    /// Fields that an update overwrites, taken from this player
    pub fn updatable_fields(&self) -> PlayerUpdate {
        PlayerUpdate::from(self)
    }
}

/// The fixed set of fields overwritten when a player is updated.
///
/// Every attribute except the identity. Adding a field to [`Player`] without
/// adding it here means updates will never touch it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerUpdate {
    pub name: String,
    pub position: String,
    pub assists: i32,
    pub year: i32,
    pub branch: String,
    pub college_id: i32,
    pub goals: i32,
    pub imagelink: String,
    pub instagram: String,
    pub age: i32,
    pub team_id: i32,
}

impl From<&Player> for PlayerUpdate {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            position: player.position.clone(),
            assists: player.assists,
            year: player.year,
            branch: player.branch.clone(),
            college_id: player.college_id,
            goals: player.goals,
            imagelink: player.imagelink.clone(),
            instagram: player.instagram.clone(),
            age: player.age,
            team_id: player.team_id,
        }
    }
}

impl From<Player> for PlayerUpdate {
    fn from(player: Player) -> Self {
        Self {
            name: player.name,
            position: player.position,
            assists: player.assists,
            year: player.year,
            branch: player.branch,
            college_id: player.college_id,
            goals: player.goals,
            imagelink: player.imagelink,
            instagram: player.instagram,
            age: player.age,
            team_id: player.team_id,
        }
    }
}
