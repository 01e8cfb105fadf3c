//! Deployment configuration for the backend and identity origins.

use std::env;

/// Where the REST backend and the identity provider live.
///
/// Defaults match the development deployment; override with
/// `GESTOCK_API_URL` / `GESTOCK_AUTH_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin, e.g. `http://localhost:8081`.
    pub api_origin: String,
    /// Identity-provider origin, e.g. `http://localhost:8080`.
    pub auth_origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_origin: "http://localhost:8081".to_string(),
            auth_origin: "http://localhost:8080".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            api_origin: env::var("GESTOCK_API_URL").unwrap_or(defaults.api_origin),
            auth_origin: env::var("GESTOCK_AUTH_URL").unwrap_or(defaults.auth_origin),
        };
        tracing::debug!(api = %config.api_origin, auth = %config.auth_origin, "resolved api config");
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_deployment() {
        let config = ApiConfig::default();
        assert_eq!(config.api_origin, "http://localhost:8081");
        assert_eq!(config.auth_origin, "http://localhost:8080");
    }
}
