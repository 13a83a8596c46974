//! Player Service - command-line access to the player repository.

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppResult;
use player_service_lib::cli::{self, Cli, Commands};
use player_service_lib::config::PlayerServiceConfig;

/// Cancel the token on Ctrl+C or SIGTERM.
fn setup_shutdown_signal(cancel_token: CancellationToken) {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(e) => {
                    tracing::warn!("Failed to listen for SIGTERM: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, cancelling...");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, cancelling...");
            }
        }

        cancel_token.cancel();
    });
}

async fn run(command: Commands, ct: &CancellationToken) -> AppResult<()> {
    let config = PlayerServiceConfig::from_env();
    let (db, repo) = player_service_lib::connect(&config).await?;

    match command {
        Commands::Ping => {
            db.ping().await?;
            println!("Database is reachable");
        }
        Commands::Player(command) => {
            println!("{}", cli::execute(command, &repo, ct).await?);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let ct = CancellationToken::new();
    setup_shutdown_signal(ct.clone());

    if let Err(e) = run(cli.command, &ct).await {
        eprintln!("error[{}]: {}", e.code(), e.user_message());
        std::process::exit(1);
    }
}
