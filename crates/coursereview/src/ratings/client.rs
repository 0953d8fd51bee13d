//! GraphQL client for the RateMyProfessors API.

use super::{RatingsError, RatingsProvider, Teacher, TeacherSearchResult};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

pub const RATINGS_API_URL: &str = "https://www.ratemyprofessors.com/graphql";

/// School id of Simon Fraser University.
pub const SCHOOL_ID: &str = "U2Nob29sLTE0ODI=";

/// Public credentials the RMP web client itself sends ("test:test").
const AUTH_TOKEN: &str = "Basic dGVzdDp0ZXN0";

const SEARCH_QUERY: &str = r#"query NewSearchTeachersQuery($text: String!, $schoolID: ID!) {
  newSearch {
    teachers(query: {text: $text, schoolID: $schoolID}) {
      edges {
        cursor
        node {
          id
          firstName
          lastName
          school {
            name
            id
          }
        }
      }
    }
  }
}"#;

const TEACHER_QUERY: &str = r#"query TeacherRatingsPageQuery($id: ID!) {
  node(id: $id) {
    ... on Teacher {
      id
      firstName
      lastName
      school {
        name
        id
        city
        state
      }
      avgDifficulty
      avgRating
      department
      numRatings
      legacyId
      wouldTakeAgainPercent
    }
  }
}"#;

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchData {
    new_search: NewSearch,
}

#[derive(Deserialize)]
struct NewSearch {
    teachers: Connection,
}

#[derive(Deserialize)]
struct Connection {
    #[serde(default)]
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct Edge {
    node: TeacherSearchResult,
}

#[derive(Deserialize)]
struct NodeData {
    node: Option<Teacher>,
}

pub struct RateMyProfessorsClient {
    client: Client,
    api_url: String,
    school_id: String,
}

impl RateMyProfessorsClient {
    pub fn new(api_url: impl Into<String>, school_id: impl Into<String>) -> Result<Self, RatingsError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RatingsError::Network {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            school_id: school_id.into(),
        })
    }

    async fn query<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T, RatingsError> {
        debug!(url = %self.api_url, "Sending ratings query");

        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, AUTH_TOKEN)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RatingsError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        let body: GraphQlResponse<T> = response.json().await?;
        unwrap_graphql(body)
    }
}

fn unwrap_graphql<T>(body: GraphQlResponse<T>) -> Result<T, RatingsError> {
    if !body.errors.is_empty() {
        let message = body
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(RatingsError::Query { message });
    }

    body.data.ok_or_else(|| RatingsError::Query {
        message: "response had no data".to_string(),
    })
}

#[async_trait::async_trait]
impl RatingsProvider for RateMyProfessorsClient {
    async fn search_teacher(&self, name: &str) -> Result<Vec<TeacherSearchResult>, RatingsError> {
        let data: SearchData = self
            .query(
                SEARCH_QUERY,
                json!({ "text": name, "schoolID": self.school_id }),
            )
            .await?;

        Ok(data
            .new_search
            .teachers
            .edges
            .into_iter()
            .map(|edge| edge.node)
            .collect())
    }

    async fn get_teacher(&self, id: &str) -> Result<Teacher, RatingsError> {
        let data: NodeData = self.query(TEACHER_QUERY, json!({ "id": id })).await?;
        data.node.ok_or_else(|| RatingsError::NotFound { id: id.to_string() })
    }
}
