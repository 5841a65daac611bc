//! Featlist HTTP client implementation

use std::time::Duration;

use featlist_core::{Feature, FeatureList, FeaturePatch, ListPatch, NewFeature, NewList};
use reqwest::{multipart, Client};
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{FeatlistClientError, Result};

/// URL-encode a feature ID for use in path segments.
///
/// Feature ids are caller-supplied free text; a literal `/` must be encoded
/// so the id forms a single path segment rather than being split in two.
fn encode_path_segment(id: &str) -> String {
    id.replace('/', "%2F")
}

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error body returned by the featlist API
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Featlist REST API client
///
/// Provides typed methods for every featlist endpoint.
#[derive(Debug, Clone)]
pub struct FeatlistClient {
    client: Client,
    base_url: Url,
}

impl FeatlistClient {
    /// Create a new featlist client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the featlist server (e.g., "http://localhost:8080")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new featlist client with custom configuration
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get a reference to the underlying HTTP client.
    ///
    /// Useful for making custom requests while reusing the client's
    /// connection pool.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    // =========================================================================
    // Health Check
    // =========================================================================

    /// Check server health
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<String> {
        let url = self.base_url.join("/health")?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    // =========================================================================
    // List Operations
    // =========================================================================

    /// List all lists with their features
    #[instrument(skip(self))]
    pub async fn list_lists(&self) -> Result<Vec<FeatureList>> {
        let url = self.base_url.join("/api/lists")?;
        debug!("Listing lists from {}", url);

        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Get a single list with its features
    #[instrument(skip(self))]
    pub async fn get_list(&self, list_id: i64) -> Result<FeatureList> {
        let url = self.base_url.join(&format!("/api/lists/{}", list_id))?;

        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Create a list, optionally with initial features
    #[instrument(skip(self, new_list))]
    pub async fn create_list(&self, new_list: &NewList) -> Result<FeatureList> {
        let url = self.base_url.join("/api/lists")?;

        let response = self.client.post(url).json(new_list).send().await?;
        self.handle_response(response).await
    }

    /// Partially update a list; `None` fields stay unchanged
    #[instrument(skip(self, patch))]
    pub async fn update_list(&self, list_id: i64, patch: &ListPatch) -> Result<FeatureList> {
        let url = self.base_url.join(&format!("/api/lists/{}", list_id))?;

        let response = self.client.put(url).json(patch).send().await?;
        self.handle_response(response).await
    }

    /// Delete a list and all of its features
    #[instrument(skip(self))]
    pub async fn delete_list(&self, list_id: i64) -> Result<()> {
        let url = self.base_url.join(&format!("/api/lists/{}", list_id))?;

        let response = self.client.delete(url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.extract_error(response).await)
        }
    }

    // =========================================================================
    // Feature Operations
    // =========================================================================

    /// Add a feature to an existing list
    #[instrument(skip(self, new_feature))]
    pub async fn add_feature(&self, list_id: i64, new_feature: &NewFeature) -> Result<Feature> {
        let url = self
            .base_url
            .join(&format!("/api/lists/{}/features", list_id))?;

        let response = self.client.post(url).json(new_feature).send().await?;
        self.handle_response(response).await
    }

    /// Partially update a feature; `None` fields stay unchanged
    #[instrument(skip(self, patch))]
    pub async fn update_feature(
        &self,
        list_id: i64,
        feature_id: &str,
        patch: &FeaturePatch,
    ) -> Result<Feature> {
        let url = self.base_url.join(&format!(
            "/api/lists/{}/features/{}",
            list_id,
            encode_path_segment(feature_id)
        ))?;

        let response = self.client.put(url).json(patch).send().await?;
        self.handle_response(response).await
    }

    /// Delete a single feature
    #[instrument(skip(self))]
    pub async fn delete_feature(&self, list_id: i64, feature_id: &str) -> Result<()> {
        let url = self.base_url.join(&format!(
            "/api/lists/{}/features/{}",
            list_id,
            encode_path_segment(feature_id)
        ))?;

        let response = self.client.delete(url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.extract_error(response).await)
        }
    }

    // =========================================================================
    // Import
    // =========================================================================

    /// Create a list from a feature file, uploaded as multipart field `file`.
    ///
    /// The server derives the list name from `filename` and parses the
    /// content as one `feature_id,feature_name` pair per line.
    #[instrument(skip(self, content))]
    pub async fn import_file(
        &self,
        filename: &str,
        content: impl Into<Vec<u8>>,
    ) -> Result<FeatureList> {
        let url = self.base_url.join("/api/import")?;

        let part = multipart::Part::bytes(content.into()).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self.client.post(url).multipart(form).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Response Handling
    // =========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| FeatlistClientError::ParseError(e.to_string()))
        } else {
            Err(self.extract_error(response).await)
        }
    }

    async fn extract_error(&self, response: reqwest::Response) -> FeatlistClientError {
        let status = response.status();

        // Try to parse the error response body
        let message = match response.json::<ErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => format!("HTTP {}", status),
        };

        FeatlistClientError::server_error(status.as_u16(), message)
    }
}
