//! HTTP fetcher for bi5 files.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Method, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

use crate::{FetchError, FileFetcher};

/// Configuration for the HTTP fetcher.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum idle pooled connections per host.
    pub max_idle_connections: usize,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Maximum retry attempts for a single request.
    ///
    /// Zero by default: the hour cursor owns the retry budget for whole
    /// fetches. Raise it when using the fetcher on its own.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_idle_connections: 2,
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            max_retries: 0,
            base_delay_ms: 500,
            max_delay_ms: 30_000,
            user_agent: format!("bi5feed/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP [`FileFetcher`] with connection pooling and retry logic.
///
/// Paths handed to this fetcher are full URLs, as built by
/// [`crate::path::hour_path`] with an HTTP root.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: ClientConfig,
}

impl HttpFetcher {
    /// Creates a new fetcher with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.max_idle_connections)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a fetcher with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a request, retrying transient failures.
    ///
    /// Returns the response for any status other than 5xx/429, which are
    /// retried until `max_retries` is exhausted.
    async fn send(&self, method: Method, url: &str) -> Result<Response, FetchError> {
        let mut attempts = 0;

        loop {
            match self.client.request(method.clone(), url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                        if attempts < self.config.max_retries {
                            attempts += 1;
                            debug!(url, status = status.as_u16(), attempts, "retrying request");
                            tokio::time::sleep(self.calculate_backoff_delay(attempts)).await;
                            continue;
                        }
                        return Err(FetchError::ServerError {
                            status: status.as_u16(),
                            path: url.to_string(),
                        });
                    }
                    return Ok(response);
                }
                Err(e) if self.is_retryable_error(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    debug!(url, error = %e, attempts, "retrying request");
                    tokio::time::sleep(self.calculate_backoff_delay(attempts)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Calculates the backoff delay with exponential backoff and jitter.
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        // base_delay * 2^attempt
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));

        let capped_delay = exp_delay.min(self.config.max_delay_ms);

        // Deterministic jitter of up to ±25%
        let jitter_range = capped_delay / 4;
        let jitter = if jitter_range > 0 {
            let jitter_offset = (u64::from(attempt) * 17) % (jitter_range * 2);
            jitter_offset as i64 - jitter_range as i64
        } else {
            0
        };

        let final_delay = (capped_delay as i64 + jitter).max(100) as u64;
        Duration::from_millis(final_delay)
    }

    /// Determines if an error is retryable.
    fn is_retryable_error(&self, error: &reqwest::Error) -> bool {
        if error.is_builder() {
            return false;
        }

        error.is_timeout() || error.is_connect() || error.is_request()
    }
}

#[async_trait]
impl FileFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<Bytes, FetchError> {
        let response = self.send(Method::GET, path).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(path.to_string()));
        }
        let response = response.error_for_status()?;
        Ok(response.bytes().await?)
    }

    async fn exists(&self, path: &str) -> Result<bool, FetchError> {
        let response = self.send(Method::HEAD, path).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        response
            .error_for_status()
            .map(|_| true)
            .map_err(FetchError::from)
    }
}
