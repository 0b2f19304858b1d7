//! HTTP client wrapper for the remote stock store.

use std::fmt;

use crate::error::{ApiError, Error, Result};
use crate::models::{NewSweet, SweetRecord};

/// Table route under the store's REST root.
const TABLE_PATH: &str = "/rest/v1/estoque_doces";

/// Client for the remote stock store.
///
/// Every project has its own store URL, so the base URL is always
/// caller-supplied. The same key is sent both as the `apikey` header and as
/// a bearer token, which is what the store's REST gateway expects.
#[derive(Clone)]
pub struct StoreClient {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl StoreClient {
    /// Creates a new client for the store at `base_url`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists all sweets, newest first.
    ///
    /// The recency order is a display convenience; callers must not attach
    /// business meaning to it.
    pub async fn list_sweets(&self) -> Result<Vec<SweetRecord>> {
        let query = serde_urlencoded::to_string([("select", "*"), ("order", "created_at.desc")])?;
        let url = format!("{}{}?{}", self.base_url, TABLE_PATH, query);

        let response = self
            .http_client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(self.parse_error_response(response).await);
        }

        Ok(response.json::<Vec<SweetRecord>>().await?)
    }

    /// Registers a new sweet and returns the stored row.
    ///
    /// The store assigns the id and `created_at`; the returned row is the
    /// authoritative version of what was written.
    pub async fn insert_sweet(&self, new: &NewSweet) -> Result<SweetRecord> {
        let url = format!("{}{}", self.base_url, TABLE_PATH);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(new)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(self.parse_error_response(response).await);
        }

        // With return=representation the store answers with an array of the
        // inserted rows.
        let mut rows = response.json::<Vec<SweetRecord>>().await?;
        rows.pop().ok_or_else(|| {
            Error::Api(ApiError::Validation {
                field: None,
                message: "insert succeeded but the store returned no row".to_string(),
            })
        })
    }

    /// Deletes the sweet with the given id. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no row has that id; the store
    /// itself answers 200 for a delete that matched nothing, so the client
    /// asks for the deleted rows back and checks the set is non-empty.
    pub async fn delete_sweet(&self, id: &str) -> Result<()> {
        let query = serde_urlencoded::to_string([("id", format!("eq.{id}"))])?;
        let url = format!("{}{}?{}", self.base_url, TABLE_PATH, query);

        let response = self
            .http_client
            .delete(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(self.parse_error_response(response).await);
        }

        let deleted = response.json::<Vec<SweetRecord>>().await?;
        if deleted.is_empty() {
            return Err(Error::Api(ApiError::NotFound {
                resource: "sweet".to_string(),
                id: id.to_string(),
            }));
        }

        Ok(())
    }

    /// Parses an error response into our error types.
    async fn parse_error_response(&self, response: reqwest::Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        let body = response.text().await.unwrap_or_default();
        let message = extract_store_message(&body).unwrap_or_else(|| {
            if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body.clone()
            }
        });

        let api_error = match status_code {
            401 | 403 => ApiError::Auth { message },
            404 => ApiError::NotFound {
                resource: "route".to_string(),
                id: TABLE_PATH.to_string(),
            },
            400 | 409 | 422 => ApiError::Validation {
                field: None,
                message,
            },
            _ => ApiError::Http {
                status: status_code,
                message,
            },
        };

        Error::Api(api_error)
    }
}

/// Maps transport failures to [`ApiError::Network`] so they get the
/// connectivity exit code; everything else stays a plain request error.
fn map_send_error(e: reqwest::Error) -> Error {
    if e.is_connect() || e.is_timeout() {
        Error::Api(ApiError::Network {
            message: e.to_string(),
        })
    } else {
        Error::Request(e)
    }
}

/// Pulls the `message` field out of a store error body, if it is JSON.
fn extract_store_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

impl fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
