use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cabin_booking_web::{app, cache::AppCache, catalog::Catalog, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cabin_booking_web=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let catalog = Catalog::load(&config.catalog_path)
        .await
        .with_context(|| format!("loading catalog from {}", config.catalog_path.display()))?;

    let state = AppState::new(catalog, AppCache::new(config.session_idle));
    let router = app(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("binding {}", config.bind_addr()))?;
    tracing::info!("Listening on {}", config.bind_addr());

    axum::serve(listener, router).await?;
    Ok(())
}
