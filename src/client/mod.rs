//! HTTP client wrapper that reports activity to the tracker.
//!
//! # Responsibilities
//! - Pair every outgoing request with exactly one begin/end on the tracker
//! - Hold the pairing through RAII so an error, timeout, or cancelled future
//!   cannot leak an in-flight count
//! - Decode JSON responses

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::HttpConfig;
use crate::tracker::ActivityTracker;

/// Errors that can occur during tracked HTTP calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Result type for tracked HTTP calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// A `reqwest` client whose requests count as in-flight operations.
///
/// The tracker is notified before the request is issued and again when the
/// response has been fully decoded (or the call failed), so a loading overlay
/// driven by the same tracker covers the entire round trip.
pub struct TrackedClient {
    http: reqwest::Client,
    tracker: Arc<ActivityTracker>,
}

impl TrackedClient {
    /// Build a client with the configured per-request timeout.
    pub fn new(tracker: Arc<ActivityTracker>, config: &HttpConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { http, tracker })
    }

    /// GET a JSON document and deserialize it.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        let _guard = self.tracker.begin_scoped();
        let response = self.http.get(url).send().await?;
        Self::require_success(&response, url)?;
        Ok(response.json().await?)
    }

    /// GET a JSON document as an untyped value.
    pub async fn get_value(&self, url: &str) -> ClientResult<serde_json::Value> {
        self.get_json(url).await
    }

    /// POST a JSON body and deserialize the JSON response.
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let _guard = self.tracker.begin_scoped();
        let response = self.http.post(url).json(body).send().await?;
        Self::require_success(&response, url)?;
        Ok(response.json().await?)
    }

    fn require_success(response: &reqwest::Response, url: &str) -> ClientResult<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::warn!(%status, url, "Tracked request failed");
            Err(ClientError::Status {
                status,
                url: url.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_request_releases_count() {
        let tracker = Arc::new(ActivityTracker::new());
        let client = TrackedClient::new(tracker.clone(), &HttpConfig::default()).unwrap();

        // Nothing listens on this port; the request errors out.
        let result: ClientResult<serde_json::Value> =
            client.get_json("http://127.0.0.1:1/nope").await;

        assert!(result.is_err());
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_error_display() {
        let err = ClientError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "http://example.invalid/invoices".into(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("/invoices"));
    }
}
