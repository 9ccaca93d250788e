//! Environment-based configuration for the remote generation client.

use std::env;
use std::time::Duration;
use url::Url;

use crate::error::AppError;

const ENDPOINT_VAR: &str = "PROMPTSMITH_ENDPOINT";
const MODEL_VAR: &str = "PROMPTSMITH_MODEL";
const TIMEOUT_VAR: &str = "PROMPTSMITH_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the remote LLM pass-through endpoint.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Endpoint receiving `{prompt, model?}` POST requests.
    pub endpoint: Url,
    /// Optional model identifier forwarded with each request.
    pub model: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            model: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from the environment (a `.env` file is honored).
    ///
    /// `PROMPTSMITH_ENDPOINT` is required; `PROMPTSMITH_MODEL` and
    /// `PROMPTSMITH_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        let raw_endpoint = env::var(ENDPOINT_VAR)
            .map_err(|_| AppError::Config(format!("{} is not set", ENDPOINT_VAR)))?;
        let endpoint = Url::parse(&raw_endpoint)?;

        let model = env::var(MODEL_VAR).ok().filter(|m| !m.is_empty());

        let timeout_secs = match env::var(TIMEOUT_VAR) {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::Config(format!("{} must be a positive integer", TIMEOUT_VAR))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            endpoint,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_endpoint_is_config_error() {
        temp_env::with_var_unset(ENDPOINT_VAR, || {
            let result = RemoteConfig::from_env();
            assert!(matches!(result, Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_full_configuration() {
        temp_env::with_vars(
            [
                (ENDPOINT_VAR, Some("http://localhost:9000/api/generate")),
                (MODEL_VAR, Some("small-instruct")),
                (TIMEOUT_VAR, Some("5")),
            ],
            || {
                let config = RemoteConfig::from_env().unwrap();
                assert_eq!(config.endpoint.as_str(), "http://localhost:9000/api/generate");
                assert_eq!(config.model.as_deref(), Some("small-instruct"));
                assert_eq!(config.timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        temp_env::with_var(ENDPOINT_VAR, Some("not a url"), || {
            let result = RemoteConfig::from_env();
            assert!(matches!(result, Err(AppError::Validation(_))));
        });
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        temp_env::with_vars(
            [
                (ENDPOINT_VAR, Some("http://localhost:9000/api/generate")),
                (TIMEOUT_VAR, Some("soon")),
            ],
            || {
                let result = RemoteConfig::from_env();
                assert!(matches!(result, Err(AppError::Config(_))));
            },
        );
    }
}
