// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use satchel_api::{ApiConfig, AuthMethod};

/// The name of the satchel application.
pub const APP_NAME: &str = "satchel";

/// Environment variable consulted when no access token is configured.
pub const TOKEN_ENV: &str = "SATCHEL_TOKEN";

/// Configuration for the satchel application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Base URL of the student self-service backend.
    pub base_url: String,

    /// Access token issued at login.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".into());
        }

        if self.access_token.is_none() {
            match std::env::var(TOKEN_ENV) {
                Ok(token) if !token.is_empty() => self.access_token = Some(token),
                _ => tracing::warn!(
                    "no access token configured and {TOKEN_ENV} is unset; requests will be unauthenticated"
                ),
            }
        }

        Ok(())
    }

    pub(crate) fn to_api_config(&self) -> ApiConfig {
        let auth = match &self.access_token {
            Some(token) => AuthMethod::Bearer {
                token: token.clone(),
            },
            None => AuthMethod::None,
        };

        let mut api = ApiConfig {
            base_url: self.base_url.clone(),
            auth,
            ..Default::default()
        };
        if let Some(timeout_secs) = self.timeout_secs {
            api.timeout_secs = timeout_secs;
        }
        api
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str(r#"base_url = "https://backend.example.com""#).unwrap();
        assert_eq!(config.base_url, "https://backend.example.com");
        assert_eq!(config.access_token, None);
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_parse_full_toml() {
        let config: Config = toml::from_str(
            r#"
base_url = "https://backend.example.com"
access_token = "tok"
timeout_secs = 5
"#,
        )
        .unwrap();
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn test_normalize_trims_trailing_slashes() {
        let mut config = Config {
            base_url: "https://backend.example.com///".to_string(),
            access_token: Some("tok".to_string()),
            timeout_secs: None,
        };
        config.normalize().unwrap();
        assert_eq!(config.base_url, "https://backend.example.com");
    }

    #[test]
    fn test_normalize_rejects_empty_base_url() {
        let mut config = Config {
            base_url: "/".to_string(),
            access_token: None,
            timeout_secs: None,
        };
        assert!(config.normalize().is_err());
    }

    #[test]
    fn test_to_api_config_carries_token() {
        let config = Config {
            base_url: "https://backend.example.com".to_string(),
            access_token: Some("tok".to_string()),
            timeout_secs: Some(5),
        };

        let api = config.to_api_config();
        assert_eq!(api.base_url, "https://backend.example.com");
        assert_eq!(api.timeout_secs, 5);
        assert!(matches!(api.auth, AuthMethod::Bearer { token } if token == "tok"));
    }
}
