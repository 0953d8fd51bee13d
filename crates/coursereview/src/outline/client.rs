//! HTTP client for the university course outline API.
//!
//! The API is a single endpoint whose query string is a slash-separated path:
//! `?2026/spring` lists departments, `?2026/spring/cmpt` lists courses,
//! `?2026/spring/cmpt/225` lists sections and `?2026/spring/cmpt/225/d100`
//! returns the section detail.

use super::error::OutlineError;
use super::types::{Course, Department, Section, SectionDetail, TermKey};
use super::OutlineApi;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Default base URL for the outline API.
pub const OUTLINE_BASE_URL: &str = "https://www.sfu.ca/bin/wcm/course-outlines";

/// Read-only client for the outline API. No retries; every call is one GET.
pub struct OutlineClient {
    client: Client,
    base_url: Url,
}

impl OutlineClient {
    /// Creates a client against a custom base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, OutlineError> {
        // Transport defaults only; a slow upstream holds the request until it resolves.
        let client = Client::builder()
            .build()
            .map_err(|e| OutlineError::Network {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Builds the request URL for the given path segments.
    fn url_for(&self, segments: &[&str]) -> Url {
        let path = segments
            .iter()
            .map(|s| s.trim().to_lowercase())
            .collect::<Vec<_>>()
            .join("/");
        let mut url = self.base_url.clone();
        url.set_query(Some(&path));
        url
    }

    /// Issues one GET and parses the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, OutlineError> {
        let url = self.url_for(segments);
        debug!(url = %url, "Fetching outline data");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OutlineError::UnexpectedStatus {
                status: status.as_u16(),
                path: url.query().unwrap_or_default().to_string(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait::async_trait]
impl OutlineApi for OutlineClient {
    async fn departments(&self, term: &TermKey) -> Result<Vec<Department>, OutlineError> {
        self.get_json(&[term.year.as_str(), term.term.as_str()]).await
    }

    async fn courses(&self, term: &TermKey, dept: &str) -> Result<Vec<Course>, OutlineError> {
        self.get_json(&[term.year.as_str(), term.term.as_str(), dept]).await
    }

    async fn sections(
        &self,
        term: &TermKey,
        dept: &str,
        course: &str,
    ) -> Result<Vec<Section>, OutlineError> {
        self.get_json(&[term.year.as_str(), term.term.as_str(), dept, course]).await
    }

    async fn section_detail(
        &self,
        term: &TermKey,
        dept: &str,
        course: &str,
        section: &str,
    ) -> Result<SectionDetail, OutlineError> {
        self.get_json(&[term.year.as_str(), term.term.as_str(), dept, course, section])
            .await
    }
}
