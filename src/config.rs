use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

/// The backend address used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Where the binary keeps its local storage file by default.
pub const DEFAULT_STORAGE_PATH: &str = ".parkeasy/local_storage.json";

/// The client's configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// The base URL of the backend API, without a trailing slash.
    pub api_url: String,
    /// The file standing in for browser local storage.
    pub storage_path: PathBuf,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Creates a new `Config` from an arbitrary variable lookup.
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of a variable, if set.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("PARKEASY_API_URL")
            .or_else(|| lookup("API_URL"))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let parsed = reqwest::Url::parse(&api_url)
            .with_context(|| format!("Invalid API URL: {}", api_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("API URL must use http or https, got {}", parsed.scheme());
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            storage_path: lookup("PARKEASY_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH)),
        })
    }
}
