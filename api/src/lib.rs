//! HTTP access to the sanctions registry backend.
//!
//! One shared [`ApiClient`] is created at startup and handed to views through
//! context. Each call resolves the project token, applies the configured
//! timeout, and maps failures into [`ApiError`].

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{self, Either};
use reqwest::Url;
use serde::de::DeserializeOwned;

pub mod config;
mod error;
pub mod token;

pub use config::ApiConfig;
pub use error::ApiError;
pub use token::TokenSource;

/// Path of a single sanctioned company record. The identifier is used verbatim.
pub fn company_sanction_path(id: &str) -> String {
    format!("sanction/company/{id}/")
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Absolute URL for a path relative to the API root.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.config
            .base_url
            .join(path)
            .map_err(|_| ApiError::InvalidUrl(format!("{}{path}", self.config.base_url)))
    }

    /// `GET` a JSON document with the project token attached.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let mut request = self.http.get(url.clone());
        match self.config.token.resolve() {
            Some(token) => request = request.header(token::PROJECT_TOKEN_HEADER, token),
            None => tracing::debug!(%url, "sending request without a project token"),
        }

        tracing::debug!(%url, "GET");
        let body = with_timeout(self.config.timeout, async move {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }
            Ok(response.text().await?)
        })
        .await??;

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch one company sanction as a raw JSON object.
    ///
    /// The caller decides what an empty object means, so no typed decoding
    /// happens here.
    pub async fn company_sanction(
        &self,
        id: &str,
    ) -> Result<serde_json::Map<String, serde_json::Value>, ApiError> {
        self.get_json(&company_sanction_path(id)).await
    }
}

/// Race `fut` against a timer. `None` waits as long as `fut` takes.
pub async fn with_timeout<F: Future>(
    limit: Option<Duration>,
    fut: F,
) -> Result<F::Output, ApiError> {
    let Some(limit) = limit else {
        return Ok(fut.await);
    };

    let fut = pin!(fut);
    let timer = pin!(sleep(limit));
    match future::select(fut, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ApiError::Timeout(limit)),
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
