//! Init-db command - creates the schema and seeds the administrator

use sqlx::MySqlPool;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::infrastructure::database::connect_pool;
use crate::infrastructure::logging::init_logging;

/// Run the bootstrap once and exit
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging);

    let pool = connect_and_bootstrap(&config).await?;
    pool.close().await;

    Ok(())
}

/// Open the pool and bring the schema up to date
///
/// Both failures are fatal: the caller must not start serving.
pub(crate) async fn connect_and_bootstrap(config: &AppConfig) -> anyhow::Result<MySqlPool> {
    let pool = connect_pool(&config.database).await.inspect_err(|e| {
        error!(error = %e, "Failed to connect to the database");
    })?;

    match crate::bootstrap_database(&pool).await {
        Ok(report) => {
            info!(admin_created = report.admin_created, "Database bootstrap complete");
            Ok(pool)
        }
        Err(e) => {
            error!(error = %e, "Database bootstrap failed");
            pool.close().await;
            Err(e.into())
        }
    }
}
