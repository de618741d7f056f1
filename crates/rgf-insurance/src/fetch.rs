//! Single-shot HTTP fetch of the RGF page.
//!
//! One GET per call with a fixed timeout and a desktop browser user-agent.
//! No retries, no backoff, no cache: every call goes to the network.

use std::time::Duration;

use crate::types::{RawDocument, RgfError, RgfResult};

/// Page fetched when no override is configured.
pub const DEFAULT_TARGET_URL: &str = "https://www.rgf.com/car-insurance";

/// Request timeout for the page fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Desktop Chrome user-agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                              AppleWebKit/537.36 (KHTML, like Gecko) \
                              Chrome/120.0.0.0 Safari/537.36";

/// Fetcher settings. Fixed per process.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_TARGET_URL.to_string(),
            timeout: FETCH_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    /// Default settings pointed at a different page.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the target page.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl PageFetcher {
    pub fn new(config: FetchConfig) -> RgfResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| RgfError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// URL this fetcher requests.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Perform exactly one GET of the target page.
    ///
    /// Timeouts, transport failures and non-2xx statuses all fail with
    /// [`RgfError::Network`].
    pub async fn fetch(&self) -> RgfResult<RawDocument> {
        let url = self.config.url.as_str();
        tracing::debug!("Fetching {url}");

        let response = self.client.get(url).send().await.map_err(|e| {
            let err = describe_transport_error(url, self.config.timeout, &e);
            tracing::warn!("{err}");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Fetch of {url} returned HTTP {status}");
            return Err(RgfError::Network(format!(
                "Request to {url} failed with HTTP status {status}"
            )));
        }

        let body = response.text().await.map_err(|e| {
            let err = describe_transport_error(url, self.config.timeout, &e);
            tracing::warn!("{err}");
            err
        })?;

        tracing::info!("Fetched {url}: HTTP {} ({} bytes)", status.as_u16(), body.len());

        Ok(RawDocument {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

fn describe_transport_error(url: &str, timeout: Duration, e: &reqwest::Error) -> RgfError {
    if e.is_timeout() {
        RgfError::Network(format!(
            "Request to {url} timed out after {}s",
            timeout.as_secs_f64()
        ))
    } else {
        RgfError::Network(format!("Request to {url} failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer, timeout: Duration) -> PageFetcher {
        let config = FetchConfig {
            url: format!("{}/car-insurance", server.uri()),
            timeout,
            user_agent: USER_AGENT.to_string(),
        };
        PageFetcher::new(config).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.url, DEFAULT_TARGET_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[tokio::test]
    async fn test_fetch_success_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/car-insurance"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>ok</body></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let doc = fetcher_for(&server, FETCH_TIMEOUT).fetch().await.unwrap();
        assert_eq!(doc.status, 200);
        assert!(doc.body.contains("ok"));
        assert!(doc.url.ends_with("/car-insurance"));
    }

    #[tokio::test]
    async fn test_every_call_refetches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>x</p>"))
            .expect(3)
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server, FETCH_TIMEOUT);
        for _ in 0..3 {
            fetcher.fetch().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_non_success_status_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let err = fetcher_for(&server, FETCH_TIMEOUT).fetch().await.unwrap_err();
        assert!(matches!(err, RgfError::Network(_)));
        assert!(err.to_string().contains("503"), "got: {err}");
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<p>late</p>")
                    .set_delay(Duration::from_millis(1500)),
            )
            .mount(&server)
            .await;

        let err = fetcher_for(&server, Duration::from_millis(200))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, RgfError::Network(_)));
        assert!(err.to_string().contains("timed out"), "got: {err}");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let config = FetchConfig::for_url("http://127.0.0.1:1/car-insurance");
        let err = PageFetcher::new(config).unwrap().fetch().await.unwrap_err();
        assert!(err.to_string().starts_with("Network error:"));
    }
}
