use std::sync::Arc;

use crate::config::Config;
use crate::identity::{ClerkClient, IdentityProvider};
use crate::outline::{OutlineApi, OutlineClient};
use crate::ratings::{RateMyProfessorsClient, RatingsProvider};

/// Shared state handed to every request handler.
pub struct AppState {
    pub config: Config,
    pub outline: Arc<dyn OutlineApi>,
    pub ratings: Arc<dyn RatingsProvider>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Builds the state with the real upstream clients.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let outline = OutlineClient::with_base_url(&config.outline_api_url)?;
        let ratings =
            RateMyProfessorsClient::new(&config.ratings_api_url, &config.ratings_school_id)?;
        let identity = ClerkClient::new(&config.clerk_api_url, config.clerk_secret_key.clone())?;

        Ok(Self {
            config,
            outline: Arc::new(outline),
            ratings: Arc::new(ratings),
            identity: Arc::new(identity),
        })
    }
}
