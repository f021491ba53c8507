//! CLI command implementations.

pub mod catalog;
pub mod diagnose;

use headless_woo_storefront::config::ConfigError;
use headless_woo_storefront::transport::ApiError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// WooCommerce or WordPress request failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Output could not be serialized.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// One or more diagnostic checks failed.
    #[error("{0} diagnostic check(s) failed")]
    DiagnosticsFailed(usize),
}

/// Print a value as pretty JSON on stdout.
#[allow(clippy::print_stdout)]
pub fn print_json(value: &impl serde::Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
