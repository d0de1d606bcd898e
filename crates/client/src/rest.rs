//! HTTP client for the marketplace REST API.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Configuration for connecting to the marketplace API.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// API base address, e.g. `"https://api.example.com"`.
    pub base_url: String,

    /// Bearer token attached to every request, when present.
    pub token: Option<String>,
}

/// Errors that can occur when talking to the marketplace API.
#[derive(Debug, Error)]
pub enum RestError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-2xx response.
    #[error("request failed with status {status}: {body}")]
    Status {
        /// Response status code.
        status: StatusCode,
        /// Raw response body, useful for backend validation payloads.
        body: String,
    },
}

/// Thin JSON-over-HTTP wrapper around [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct RestClient {
    config: RestConfig,
    http: Client,
}

impl RestClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: RestConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Issue a GET request and deserialize the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx status.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RestError> {
        let response = self.authorize(self.http.get(self.url(path))).send().await?;

        Self::parse(response).await
    }

    /// Issue a POST request with a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx status.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, RestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Issue a PUT request with a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx status.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, RestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(self.http.put(self.url(path)))
            .json(body)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Issue a PATCH request with a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx status.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, RestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(self.http.patch(self.url(path)))
            .json(body)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Issue a DELETE request, discarding any response body.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), RestError> {
        let response = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, RestError> {
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Ok(response.json().await?)
    }

    async fn status_error(response: Response) -> RestError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        RestError::Status { status, body }
    }
}
