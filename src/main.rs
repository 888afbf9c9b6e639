use dotenvy::dotenv;
use tracing::{error, info};

use schoolhouse::logging::init_tracing;
use schoolhouse::router::init_router;
use schoolhouse::schoolhouse_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
use schoolhouse::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    if let Err(e) = run().await {
        error!(error = ?e, "Server failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let server_config = ServerConfig::from_env();
    let state = init_app_state(
        &DatabaseConfig::from_env(),
        JwtConfig::from_env(),
        CorsConfig::from_env()?,
    )
    .await?;
    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
