//! # Client configuration (`todo.toml`)
//!
//! Where the client finds the remote API and the federated login entry
//! point. The web binary embeds its `todo.toml` at build time.
//!
//! ```toml
//! [api]
//! base_url = "/api"                      # relative to the page origin, or absolute
//!
//! [auth]
//! federated_login_url = "/auth/google/login"
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Remote API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Federated login settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Page the browser is sent to for "Sign in with Google".
    #[serde(default = "default_federated_login_url")]
    pub federated_login_url: String,
}

fn default_federated_login_url() -> String {
    "/auth/google/login".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            federated_login_url: default_federated_login_url(),
        }
    }
}

impl ClientConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Base URL resolved against `origin` when it is relative.
    ///
    /// `origin` is the page origin (`https://todo.example.com`); pass `None`
    /// outside a browser to keep the base as written.
    pub fn resolved_base_url(&self, origin: Option<&str>) -> String {
        let base = self.api.base_url.trim_end_matches('/');
        match origin {
            Some(origin) if base.starts_with('/') => {
                format!("{}{}", origin.trim_end_matches('/'), base)
            }
            _ => base.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.auth.federated_login_url, "/auth/google/login");
    }

    #[test]
    fn test_partial_file() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://todo.example.com/v1/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://todo.example.com/v1/");
        assert_eq!(config.auth, AuthConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = ClientConfig::default();
        config.auth.federated_login_url = "/sso/start".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_resolved_base_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.resolved_base_url(Some("http://local.todo.com/")),
            "http://local.todo.com/api"
        );
        assert_eq!(config.resolved_base_url(None), "/api");

        let mut absolute = ClientConfig::default();
        absolute.api.base_url = "https://api.example.com/".to_string();
        assert_eq!(
            absolute.resolved_base_url(Some("http://local.todo.com")),
            "https://api.example.com"
        );
    }
}
