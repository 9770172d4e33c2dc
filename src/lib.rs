// Library root for the message processing service

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::api::process::{decorate, InboundMessage, OutboundResult, ProcessError};
pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
