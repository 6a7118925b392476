use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::config::SiteConfig;
use folio::database::setup_database;
use folio::routes::setup_router;
use folio::state::AppState;
use folio::storage::SqliteStore;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env()?;

    let pool = setup_database(&config.database_url).await?;
    let store = Arc::new(SqliteStore::new(pool));

    let addr = config.server_addr();
    let app = setup_router(AppState::new(store, config));

    tracing::info!("listening on {addr}");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
