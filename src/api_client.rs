//! HTTP client bound to the library backend

use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
};

/// Thin JSON client; every service call goes through it
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured backend
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self::with_client(http, &config.base_url))
    }

    /// Wrap an already configured `reqwest` client
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.http.get(self.url(path)).send().await?;
        let response = Self::check("GET", path, response).await?;
        let bytes = response.bytes().await?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// POST `body` as JSON to `path`; the response body is ignored
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AppResult<()> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::check("POST", path, response).await?;
        Ok(())
    }

    async fn check(method: &str, path: &str, response: Response) -> AppResult<Response> {
        let status = response.status();
        tracing::debug!("{} {} -> {}", method, path, status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::Status { status, body })
    }
}
