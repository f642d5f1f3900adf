//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Shared secret used when `API_KEY` is not set. Only suitable for local use.
pub const DEFAULT_API_KEY: &str = "mysecretkey";

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `PORT` (optional): HTTP server port, defaults to 3000
/// - `API_KEY` (optional): shared secret expected in the `x-api-key` header,
///   defaults to [`DEFAULT_API_KEY`]
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub api_key: Option<String>,
}

/// Default port if PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads an optional `.env` file first, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed
    /// (e.g. a non-numeric `PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an arbitrary set of key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        // Field names are converted automatically: api_key -> API_KEY
        envy::from_iter::<_, Config>(vars)
    }

    /// The effective shared secret.
    pub fn api_key(&self) -> &str {
        self.configured_key().unwrap_or(DEFAULT_API_KEY)
    }

    /// Whether the insecure built-in key is in effect.
    pub fn uses_default_api_key(&self) -> bool {
        self.configured_key().is_none()
    }

    // An empty API_KEY counts as unset
    fn configured_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}
