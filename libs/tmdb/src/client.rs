use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::Client;

use crate::error::TmdbError;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Shared API key that can be updated at runtime.
pub type ApiKey = Arc<RwLock<String>>;

pub struct TmdbClient {
    client: Client,
    api_key: ApiKey,
    base_url: String,
    pub(crate) lang: String,
}

impl TmdbClient {
    /// Create a TmdbClient with a reqwest Client.
    pub fn new(client: Client, api_key: ApiKey) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: "en-US".to_string(),
        }
    }

    /// Point the client at another API root (trailing slashes are ignored).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Get the current API key
    pub(crate) fn api_key(&self) -> String {
        self.api_key.read().clone()
    }

    /// Get the HTTP client for making requests.
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET with the api key and language attached.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> crate::Result<T> {
        let url = self.url(path);
        let api_key = self.api_key();
        tracing::debug!("GET {}", url);

        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", api_key.as_str()),
                ("language", self.lang.as_str()),
            ])
            .query(params)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
