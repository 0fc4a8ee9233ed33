use anyhow::Context;
use sqlx::PgPool;

use keel_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    keel_observability::init();

    let config = ApiConfig::from_env()?;

    if let Some(url) = &config.database_url {
        let pool = PgPool::connect(url)
            .await
            .context("failed to connect to Postgres")?;
        keel_db::migrate(&pool).await?;
    } else {
        tracing::info!("DATABASE_URL not set; skipping migrations");
    }

    let app = keel_api::app::build_app();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("API is running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
