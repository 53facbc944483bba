// src/main.rs
use anyhow::Context;
use tracing::info;

use polls::config::Config;
use polls::state::AppState;
use polls::{db, logging, routes, templates};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init_logging(&config)?;

    let pool = db::create_pool(&config.database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database_url))?;
    db::migrate(&pool).await.context("Failed to apply migrations")?;

    let templates = templates::load().context("Failed to load templates")?;
    let app = routes::create_routes(AppState::new(pool, templates));

    let addr = config.bind_addr();
    info!("Polls listening on http://{}{}", addr, routes::INDEX_PATH);

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
