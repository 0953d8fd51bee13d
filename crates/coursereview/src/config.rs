//! Runtime configuration loaded from the environment.

use crate::identity::CLERK_API_URL;
use crate::outline::{AggregatorConfig, OUTLINE_BASE_URL};
use crate::ratings::{RATINGS_API_URL, SCHOOL_ID};
use anyhow::Context;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub clerk_api_url: String,
    pub clerk_secret_key: Option<String>,
    pub ratings_api_url: String,
    pub ratings_school_id: String,
    pub outline_api_url: String,
    pub aggregator: AggregatorConfig,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// Call after `.env` has been loaded. Unset variables fall back to their
    /// defaults; set but unparsable values are an error.
    pub fn load() -> anyhow::Result<Self> {
        let aggregator = match var("AGGREGATOR_CONFIG") {
            Some(path) => {
                let path = PathBuf::from(path);
                info!("Loading aggregator settings from {}", path.display());
                AggregatorConfig::load_from_file(&path).map_err(|e| {
                    anyhow::anyhow!("Failed to load {}: {}", path.display(), e)
                })?
            }
            None => AggregatorConfig::default(),
        };

        let clerk_secret_key = var("CLERK_SECRET_KEY");
        if clerk_secret_key.is_none() {
            warn!("CLERK_SECRET_KEY not set, review submissions will fail to update profiles");
        }

        Ok(Self {
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: try_load("PORT", 3001)?,
            clerk_api_url: var("CLERK_API_URL").unwrap_or_else(|| CLERK_API_URL.to_string()),
            clerk_secret_key,
            ratings_api_url: var("RATINGS_API_URL").unwrap_or_else(|| RATINGS_API_URL.to_string()),
            ratings_school_id: var("RATINGS_SCHOOL_ID").unwrap_or_else(|| SCHOOL_ID.to_string()),
            outline_api_url: var("OUTLINE_API_URL").unwrap_or_else(|| OUTLINE_BASE_URL.to_string()),
            aggregator,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3001,
            clerk_api_url: CLERK_API_URL.to_string(),
            clerk_secret_key: None,
            ratings_api_url: RATINGS_API_URL.to_string(),
            ratings_school_id: SCHOOL_ID.to_string(),
            outline_api_url: OUTLINE_BASE_URL.to_string(),
            aggregator: AggregatorConfig::default(),
        }
    }
}

/// Non-empty environment variable, if set.
fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
