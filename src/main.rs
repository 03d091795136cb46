// ==========================================
// Opsboard - Server Entry Point
// ==========================================

use opsboard::app::{router, AppState};
use opsboard::config::AppConfig;
use opsboard::logging;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env();
    info!(
        version = opsboard::VERSION,
        db_path = %config.db_path,
        "starting {}",
        opsboard::APP_NAME
    );

    let state = AppState::new(&config.db_path)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
