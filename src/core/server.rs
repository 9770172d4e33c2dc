// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::from_fn,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};

use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::api::{fallback::fallback_handler, process::routes::process_routes};
use crate::utils::{
    error_handler::handle_global_error,
    request_logger::request_logger,
};

/// Builds the dispatch table once at startup; it lives as long as the server.
///
/// Body size cap and request timeout are only applied when configured.
pub fn create_app(state: AppState) -> Router {
    let env: &EnvironmentVariables = &state.environment;
    let body_limit: DefaultBodyLimit = match env.max_request_body_size {
        Some(max_body_size) => DefaultBodyLimit::max(max_body_size),
        None => DefaultBodyLimit::disable(),
    };
    let timeout: Option<Duration> = env.default_timeout_seconds.map(Duration::from_secs);

    let router: Router<AppState> = Router::new()
        .merge(process_routes())
        .fallback(fallback_handler)
        .layer(body_limit);

    let router: Router<AppState> = match timeout {
        Some(timeout) => router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(timeout)),
        ),
        None => router,
    };

    router
        .layer(from_fn(request_logger))
        .with_state(state)
}

/// Takes a listener handed over by the environment (systemfd) or binds a new one
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = env.listen_address();
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install TERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
