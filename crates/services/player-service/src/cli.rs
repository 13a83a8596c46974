//! Command-line surface over the player repository.

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::Player;

use crate::repository::PlayerRepo;

#[derive(Debug, Parser)]
#[command(name = "player-service")]
#[command(about = "Player data access tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check database connectivity
    Ping,
    #[command(flatten)]
    Player(PlayerCommand),
}

/// Commands answered by the repository.
#[derive(Debug, Subcommand)]
pub enum PlayerCommand {
    /// Insert a player from a JSON document
    Create {
        /// Player JSON; an id is generated when `_id` is missing
        #[arg(long)]
        json: String,
    },
    /// Show the first player with the given name
    Get { name: String },
    /// List the players of a team
    List {
        #[arg(allow_hyphen_values = true)]
        team_id: i32,
    },
    /// Overwrite an existing player from a JSON document
    Update {
        #[arg(long)]
        json: String,
    },
    /// Delete a player by id
    Delete { id: String },
}

/// Run one player command and render its output.
pub async fn execute(
    command: PlayerCommand,
    repo: &dyn PlayerRepo,
    ct: &CancellationToken,
) -> AppResult<String> {
    match command {
        PlayerCommand::Create { json } => {
            let mut player = parse_player(&json)?;
            if player.id.is_empty() {
                player.id = Uuid::new_v4().to_string();
            }
            repo.create_player(&player, ct).await?;
            Ok(format!("Created player {} with id {}", player.name, player.id))
        }
        PlayerCommand::Get { name } => {
            let player = repo.get_player(&name, ct).await?.ok_or_not_found()?;
            to_json(&player)
        }
        PlayerCommand::List { team_id } => {
            let players = repo.get_players(team_id, ct).await?;
            to_json(&players)
        }
        PlayerCommand::Update { json } => {
            let player = parse_player(&json)?;
            if player.id.is_empty() {
                return Err(AppError::validation("Player JSON must include `_id`"));
            }
            if repo.update_player(&player, ct).await? {
                Ok(format!("Updated player {}", player.id))
            } else {
                Ok(format!("Player {} was not found or is unchanged", player.id))
            }
        }
        PlayerCommand::Delete { id } => {
            if repo.delete_player(&id, ct).await? {
                Ok(format!("Deleted player {}", id))
            } else {
                Ok(format!("No player with id {} was found", id))
            }
        }
    }
}

fn parse_player(json: &str) -> AppResult<Player> {
    serde_json::from_str(json)
        .map_err(|e| AppError::validation(format!("Invalid player JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::internal(e.to_string()))
}
