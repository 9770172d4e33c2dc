// Application state shared with every handler

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;

// Built once in main and handed to the router; cloning is an Arc bump
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
}

impl AppState {
    /// Creates a new AppState from an already loaded configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self {
            environment: Arc::new(environment),
        }
    }

    /// Loads the configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;
        Ok(Self::new(environment))
    }
}
