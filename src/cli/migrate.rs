use anyhow::Result;

pub async fn migrate(config: crate::config::Config) -> Result<()> {
    tracing::info!(url = %config.database.url, "Running database migrations...");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    crate::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}
