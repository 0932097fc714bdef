//! Shared HTTP plumbing for the Poupai backend.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};

/// Matches the mobile app's request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend client. Cheap to clone; clones share the connection pool.
///
/// Every user-scoped call takes the user id explicitly.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;

        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send and turn any non-2xx status into [`ApiError::Server`].
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let resp = request.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = match resp.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!(%status, error = %err, "failed to read error body");
                return Err(err.into());
            }
        };
        warn!(%status, "backend request failed");
        Err(ApiError::Server { status, body })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!(path, "GET");
        let resp = self.send(self.http.get(self.url(path)).query(query)).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "POST");
        let resp = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "PUT");
        let resp = self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn patch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!(path, "PATCH");
        let resp = self.send(self.http.patch(self.url(path)).query(query)).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        debug!(path, "DELETE");
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let c = ApiClient::new("http://192.168.1.8:5177/").unwrap();
        assert_eq!(c.base_url(), "http://192.168.1.8:5177");
        assert_eq!(c.url("/api/Meta/3"), "http://192.168.1.8:5177/api/Meta/3");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
        assert!(err.status().is_none());
    }
}
