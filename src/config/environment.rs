// Start of file: /src/config/environment.rs

// * Environment configuration, loaded once at startup and shared
// * through `AppState`.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8081;
const DEFAULT_PROCESSED_MARKER: &str = "[Processed]";

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    // ? Unset means no body cap and no request timeout
    pub max_request_body_size: Option<usize>,
    pub default_timeout_seconds: Option<u64>,
    pub processed_marker: Cow<'static, str>,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_request_body_size: None,
            default_timeout_seconds: None,
            processed_marker: Cow::Borrowed(DEFAULT_PROCESSED_MARKER),
        }
    }
}

impl EnvironmentVariables {
    // * Loads environment variables from the process.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        let vars: HashMap<String, String> = std::env::vars().collect();
        let config: EnvironmentVariables = Self::from_vars(&vars)?;

        if cfg!(debug_assertions) {
            tracing::debug!("Loaded environment configuration: {:#?}", config);
        }

        Ok(config)
    }

    // * Builds the configuration from an explicit variable map,
    // * providing defaults for anything missing.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?,

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?,

            processed_marker: get_var("PROCESSED_MARKER")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_PROCESSED_MARKER)),
        })
    }

    /// `host:port` string handed to the listener
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = EnvironmentVariables::from_vars(&HashMap::new()).unwrap();

        assert_eq!(config, EnvironmentVariables::default());
        assert_eq!(config.max_request_body_size, None);
        assert_eq!(config.default_timeout_seconds, None);
        assert_eq!(config.listen_address(), "0.0.0.0:8081");
    }

    #[test]
    fn explicit_variables_override_defaults() {
        let config = EnvironmentVariables::from_vars(&vars(&[
            ("ENVIRONMENT", "production"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("MAX_REQUEST_BODY_SIZE", "1024"),
            ("DEFAULT_TIMEOUT_SECONDS", "10"),
            ("PROCESSED_MARKER", "[Handled]"),
        ]))
        .unwrap();

        assert_eq!(config.environment, "production");
        assert_eq!(config.listen_address(), "127.0.0.1:9000");
        assert_eq!(config.max_request_body_size, Some(1024));
        assert_eq!(config.default_timeout_seconds, Some(10));
        assert_eq!(config.processed_marker, "[Handled]");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = EnvironmentVariables::from_vars(&vars(&[("PORT", "eighty")])).unwrap_err();

        assert!(err.to_string().contains("Invalid PORT value"));
    }
}

// End of file: /src/config/environment.rs
