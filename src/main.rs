use blog_api::config::{AppConfig, ConfigError};
use blog_api::{create_rocket, db, telemetry};
use thiserror::Error;

#[derive(Debug, Error)]
enum BootError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to open database: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("server error: {0}")]
    Launch(#[from] rocket::Error),
}

#[rocket::main]
async fn main() -> Result<(), BootError> {
    let config = AppConfig::from_env()?;
    telemetry::init_tracing(config.json_logs);

    let conn = db::open(&config.database_url)?;
    tracing::info!(database = ?config.database_url, "Store opened");

    let _rocket = create_rocket(conn).launch().await?;
    tracing::info!("Server shut down");
    Ok(())
}
