//! Clerk backend API client.

use super::{IdentityError, IdentityProvider};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const CLERK_API_URL: &str = "https://api.clerk.com/v1";

pub struct ClerkClient {
    client: Client,
    api_url: Url,
    secret_key: Option<String>,
}

impl ClerkClient {
    /// Creates a client. A missing secret key is allowed so the rest of the
    /// service can run; metadata updates then fail with `NotConfigured`.
    pub fn new(api_url: impl Into<String>, secret_key: Option<String>) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| IdentityError::Network {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        let api_url = api_url.into();
        let api_url = Url::parse(api_url.trim_end_matches('/')).map_err(|e| IdentityError::InvalidUrl {
            message: e.to_string(),
        })?;
        if api_url.cannot_be_a_base() {
            return Err(IdentityError::InvalidUrl {
                message: format!("{} cannot take path segments", api_url),
            });
        }

        Ok(Self {
            client,
            api_url,
            secret_key: secret_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// `<api>/users/<user_id>/metadata`, with the id encoded as one segment.
    fn metadata_url(&self, user_id: &str) -> Result<Url, IdentityError> {
        if user_id.is_empty() || user_id == "." || user_id == ".." {
            return Err(IdentityError::InvalidUserId {
                user_id: user_id.to_string(),
            });
        }

        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| IdentityError::InvalidUrl {
                message: self.api_url.to_string(),
            })?
            .pop_if_empty()
            .push("users")
            .push(user_id)
            .push("metadata");
        Ok(url)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for ClerkClient {
    async fn update_public_metadata(&self, user_id: &str, metadata: Value) -> Result<(), IdentityError> {
        let secret_key = self.secret_key.as_deref().ok_or(IdentityError::NotConfigured)?;
        let url = self.metadata_url(user_id)?;
        debug!(url = %url, "Updating user metadata");

        let response = self
            .client
            .patch(url)
            .bearer_auth(secret_key)
            .json(&json!({ "public_metadata": metadata }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
