use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_server::{Config, MemoryStore, SharedStore, SledStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::from_env()?;

    let store: SharedStore = match &config.db_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "opening sled store");
            Arc::new(SledStore::open(path)?)
        }
        None => {
            tracing::info!("using in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    todo_server::run(listener, store, config.cors_origin).await?;
    Ok(())
}
