use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_preview::api::{AppState, create_router};
use payroll_preview::config::{ConfigLoader, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ConfigLoader::load(&settings.rules_dir)?;
    info!(
        rules = %config.metadata().name,
        version = %config.metadata().version,
        dir = %settings.rules_dir.display(),
        "Rules loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(settings.server_addr).await?;
    info!(addr = %settings.server_addr, "Server starting...");

    axum::serve(listener, app).await?;
    Ok(())
}
