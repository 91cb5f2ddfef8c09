//! Generic HTTP verb client for the plate resource API.

use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use shared::error::ApiError;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("request to {path} could not complete: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} returned status {status}")]
    Status {
        path: String,
        status: StatusCode,
        detail: Option<ApiError>,
    },
    #[error("invalid response body from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Thin wrapper around one `reqwest::Client` that speaks JSON against
/// paths relative to a fixed base URL.
pub struct ResourceClient {
    http: Client,
    base_url: String,
}

impl ResourceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ResourceError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|source| transport(path, source))?;
        decode(path, response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ResourceError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|source| transport(path, source))?;
        decode(path, response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ResourceError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|source| transport(path, source))?;
        decode(path, response).await
    }

    /// DELETE the resource at `path`. Any response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ResourceError> {
        let response = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(|source| transport(path, source))?;
        check_status(path, response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn transport(path: &str, source: reqwest::Error) -> ResourceError {
    ResourceError::Transport {
        path: path.to_string(),
        source,
    }
}

async fn check_status(path: &str, response: Response) -> Result<Response, ResourceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Not every backend attaches a structured body; a bare status is fine.
    let detail = response.json::<ApiError>().await.ok();
    Err(ResourceError::Status {
        path: path.to_string(),
        status,
        detail,
    })
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ResourceError> {
    let response = check_status(path, response).await?;
    response.json().await.map_err(|source| ResourceError::Decode {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/resource_tests.rs"]
mod tests;
