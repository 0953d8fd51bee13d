//! User identity provider access.
//!
//! Only one operation is needed: merging public metadata into a user profile
//! (used to mark a user as a contributor after a review).

mod clerk;

pub use clerk::{ClerkClient, CLERK_API_URL};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    /// No secret key was supplied at startup
    #[error("Identity provider is not configured")]
    NotConfigured,

    /// The user id cannot be used as a single URL path segment
    #[error("Invalid user id: {user_id:?}")]
    InvalidUserId { user_id: String },

    #[error("Invalid API URL: {message}")]
    InvalidUrl { message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Identity provider returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl From<reqwest::Error> for IdentityError {
    fn from(err: reqwest::Error) -> Self {
        IdentityError::Network {
            message: err.to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Merges `metadata` into the user's public metadata.
    async fn update_public_metadata(&self, user_id: &str, metadata: Value) -> Result<(), IdentityError>;
}
