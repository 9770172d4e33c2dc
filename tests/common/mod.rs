//! tests/common/mod.rs
//! A shared test helper to spawn the app on an ephemeral port.

use axum::{serve, Router};
use message_processor::config::{environment::EnvironmentVariables, state::AppState};
use message_processor::core::server::create_app;
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the app with default settings and returns its base URL.
#[allow(dead_code)]
pub fn spawn_app() -> String {
    spawn_app_with(EnvironmentVariables::default())
}

/// Spawns the app with the given settings on a random unused port.
#[allow(dead_code)]
pub fn spawn_app_with(env: EnvironmentVariables) -> String {
    // * Build the application exactly as main() does.
    let app: Router = create_app(AppState::new(env));

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}
