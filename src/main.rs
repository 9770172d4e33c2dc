// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;
use tracing::{error, info};

use message_processor::config::state::AppState;
use message_processor::core::{
    logging::init_tracing,
    server::{create_app, setup_listener, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Startup failures are fatal: log and exit non-zero
    if let Err(err) = run().await {
        error!("Fatal startup error: {:#}", err);
        return Err(err);
    }

    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let state: AppState = AppState::from_env()?;
    let listener: TcpListener = setup_listener(&state.environment).await?;
    let app: Router = create_app(state);

    info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

// End of file: src/main.rs
