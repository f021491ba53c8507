//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `WORDPRESS_URL` - WordPress site root (default: <http://localhost:10033>)
//! - `WC_CONSUMER_KEY` - WooCommerce REST API consumer key
//! - `WC_CONSUMER_SECRET` - WooCommerce REST API consumer secret
//! - `WC_API_VERSION` - WooCommerce REST namespace (default: wc/v3)
//! - `STORE_CURRENCY` - ISO currency used for display (default: CAD)
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const DEFAULT_WORDPRESS_URL: &str = "http://localhost:10033";
const DEFAULT_API_VERSION: &str = "wc/v3";
const DEFAULT_CURRENCY: &str = "CAD";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// WordPress / WooCommerce connection settings
    pub wordpress: WordPressConfig,
    /// ISO currency code prices are displayed in
    pub currency: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g. "production")
    pub sentry_environment: Option<String>,
}

/// Connection settings for the WordPress site and its WooCommerce API.
///
/// Implements `Debug` manually to redact the consumer secret.
#[derive(Clone)]
pub struct WordPressConfig {
    /// Site root, without `/wp-json`
    pub site_url: String,
    /// WooCommerce REST namespace (e.g. `wc/v3`)
    pub api_version: String,
    /// REST API consumer key
    pub consumer_key: String,
    /// REST API consumer secret
    pub consumer_secret: SecretString,
}

impl std::fmt::Debug for WordPressConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordPressConfig")
            .field("site_url", &self.site_url)
            .field("api_version", &self.api_version)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .finish()
    }
}

impl WordPressConfig {
    /// Whether both the consumer key and secret are set.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.consumer_key.is_empty() && !self.consumer_secret.expose_secret().is_empty()
    }
}

impl Default for WordPressConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_WORDPRESS_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            consumer_key: String::new(),
            consumer_secret: SecretString::from(String::new()),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = env_or("STOREFRONT_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = env_or("STOREFRONT_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;

        let wordpress = WordPressConfig {
            site_url: env_or("WORDPRESS_URL", DEFAULT_WORDPRESS_URL),
            api_version: env_or("WC_API_VERSION", DEFAULT_API_VERSION),
            consumer_key: env_or("WC_CONSUMER_KEY", ""),
            consumer_secret: SecretString::from(env_or("WC_CONSUMER_SECRET", "")),
        };

        Ok(Self {
            host,
            port,
            wordpress,
            currency: env_or("STORE_CURRENCY", DEFAULT_CURRENCY),
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.wordpress.site_url, "http://localhost:10033");
        assert_eq!(config.wordpress.api_version, "wc/v3");
        assert_eq!(config.currency, "CAD");
        assert!(!config.wordpress.has_credentials());
        assert!(config.sentry_dsn.is_none());

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("WORDPRESS_URL", "https://shop.example.com"),
            ("WC_CONSUMER_KEY", "ck_live"),
            ("WC_CONSUMER_SECRET", "cs_live"),
            ("STORE_CURRENCY", "USD"),
            ("STOREFRONT_HOST", "0.0.0.0"),
            ("STOREFRONT_PORT", "8080"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
        ])
        .unwrap();

        assert_eq!(config.wordpress.site_url, "https://shop.example.com");
        assert!(config.wordpress.has_credentials());
        assert_eq!(config.currency, "USD");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(config.sentry_dsn.is_some());
    }

    #[test]
    fn test_key_without_secret_is_not_credentials() {
        let config = load(&[("WC_CONSUMER_KEY", "ck_live")]).unwrap();
        assert!(!config.wordpress.has_credentials());
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("STOREFRONT_PORT", "http")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_PORT")
        );
    }

    #[test]
    fn test_invalid_host() {
        let err = load(&[("STOREFRONT_HOST", "localhost")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_HOST")
        );
    }

    #[test]
    fn test_empty_sentry_dsn_is_unset() {
        let config = load(&[("SENTRY_DSN", "")]).unwrap();
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_wordpress_config_debug_redacts_secret() {
        let config = WordPressConfig {
            consumer_key: "ck_visible".to_string(),
            consumer_secret: SecretString::from("cs_super_secret"),
            ..WordPressConfig::default()
        };

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("ck_visible"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("cs_super_secret"));
    }
}
