use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waitlist_migrate::config::MigrationConfig;
use waitlist_migrate::error::MigrateResult;
use waitlist_migrate::pipeline::{self, MigrationReport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waitlist_migrate=info,waitlist_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match migrate().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e.chain(), "Migration failed");
            ExitCode::FAILURE
        }
    }
}

async fn migrate() -> MigrateResult<MigrationReport> {
    let config = MigrationConfig::from_env()?;
    tracing::info!(
        database = %config.redacted_url(),
        data_dir = %config.data_dir.display(),
        "Loaded migration configuration"
    );

    let pool = waitlist_db::create_pool(config.connect_options()).await?;
    waitlist_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    let result = pipeline::run(&config, &pool).await;
    pool.close().await;
    result
}
