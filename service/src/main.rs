//! Circle service entry point
//!
//! Wires the HTTP directory adapter into the user service and runs the
//! current-user and friends use cases once, logging the outcome.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use circle_service::adapters::{DirectoryUserRepository, HttpUserDirectory};
use circle_service::app::UserService;
use circle_service::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,circle_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(url = %config.directory_url, "using user directory");

    let directory = Arc::new(HttpUserDirectory::new(
        config.directory_url.clone(),
        config.directory_token.clone(),
    ));
    let users = Arc::new(DirectoryUserRepository::new(directory));
    let service = UserService::new(users);

    let me = service.get_current_user().await?;
    tracing::info!(id = %me.id(), name = me.name(), "current user resolved");

    let friends = service.get_my_friends().await?;
    tracing::info!(count = friends.len(), "fetched friends");
    for friend in &friends {
        match friend.friends_count() {
            Some(n) => {
                tracing::info!(id = %friend.id(), name = friend.name(), friends = n, "friend")
            }
            None => tracing::info!(id = %friend.id(), name = friend.name(), "friend (no profile)"),
        }
    }

    Ok(())
}
