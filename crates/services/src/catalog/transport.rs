use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{header::HeaderMap, Method, StatusCode};

use super::ports::CatalogError;

/// Statuses worth another attempt
pub const RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Statuses whose `Retry-After` header is honored
pub const RETRY_AFTER_STATUSES: [u16; 3] = [413, 429, 503];

/// Upper bound for a computed backoff delay
pub const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Retry settings for catalog requests
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_factor: f64,
    pub request_timeout: Duration,
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based).
    ///
    /// The first retry goes out immediately, after that the delay doubles:
    /// `factor * 2^(retry - 1)`, capped at [`MAX_BACKOFF`].
    pub fn backoff_for(&self, retry: u32) -> Duration {
        if retry <= 1 || self.backoff_factor <= 0.0 {
            return Duration::ZERO;
        }
        let exponent = (retry - 1).min(32) as i32;
        let seconds = self.backoff_factor * 2f64.powi(exponent);
        Duration::from_secs_f64(seconds.min(MAX_BACKOFF.as_secs_f64()))
    }

    /// Delay before retry number `retry`. A server-sent `Retry-After` wins,
    /// unless it is zero, in which case the computed backoff applies.
    pub fn delay_for(&self, retry: u32, retry_after: Option<Duration>) -> Duration {
        retry_after
            .filter(|delay| !delay.is_zero())
            .unwrap_or_else(|| self.backoff_for(retry))
    }

    pub fn is_retryable_status(status: StatusCode) -> bool {
        RETRY_STATUSES.contains(&status.as_u16())
    }

    /// Only methods without side effects are replayed
    pub fn is_retryable_method(method: &Method) -> bool {
        matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
    }
}

impl From<&config::CatalogConfig> for RetryPolicy {
    fn from(config: &config::CatalogConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff_factor: config.backoff_factor,
            request_timeout: config.request_timeout,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&config::CatalogConfig::default())
    }
}

enum AttemptOutcome {
    Success(String),
    Retryable {
        error: CatalogError,
        retry_after: Option<Duration>,
    },
    Fatal(CatalogError),
}

/// HTTP transport that replays transient failures.
///
/// Every attempt is bounded by the policy's request timeout. Timeouts,
/// connection failures and the statuses in [`RETRY_STATUSES`] consume the
/// retry budget; any other non-2xx status fails immediately.
#[derive(Debug, Clone)]
pub struct RetryingTransport {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl RetryingTransport {
    pub fn new(policy: RetryPolicy) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(policy.request_timeout)
            .user_agent(concat!("starrr/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::RequestFailed(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, policy })
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// GET `url` and return the response body
    pub async fn get(&self, url: &str) -> Result<String, CatalogError> {
        self.send(Method::GET, url).await
    }

    pub async fn send(&self, method: Method, url: &str) -> Result<String, CatalogError> {
        let replayable = RetryPolicy::is_retryable_method(&method);
        let mut retries = 0u32;

        loop {
            let (error, retry_after) = match self.attempt(&method, url).await {
                AttemptOutcome::Success(body) => {
                    if retries > 0 {
                        tracing::info!(
                            url = %url,
                            attempts = retries + 1,
                            "Catalog request succeeded after retry"
                        );
                    }
                    return Ok(body);
                }
                AttemptOutcome::Fatal(error) => return Err(error),
                AttemptOutcome::Retryable { error, retry_after } => (error, retry_after),
            };

            if !replayable {
                return Err(error);
            }

            if retries >= self.policy.max_retries {
                tracing::error!(
                    url = %url,
                    attempts = retries + 1,
                    error = %error,
                    "Catalog request failed permanently"
                );
                return Err(CatalogError::RetriesExhausted {
                    attempts: retries + 1,
                    last_error: Box::new(error),
                });
            }

            retries += 1;
            let delay = self.policy.delay_for(retries, retry_after);

            tracing::warn!(
                url = %url,
                retry = retries,
                max_retries = self.policy.max_retries,
                error = %error,
                delay_ms = delay.as_millis() as u64,
                "Catalog request failed, retrying"
            );

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }

    async fn attempt(&self, method: &Method, url: &str) -> AttemptOutcome {
        let response = match self.client.request(method.clone(), url).send().await {
            Ok(response) => response,
            Err(e) => {
                return AttemptOutcome::Retryable {
                    error: classify_request_error(e),
                    retry_after: None,
                }
            }
        };

        let status = response.status();
        if status.is_success() {
            return match response.text().await {
                Ok(body) => AttemptOutcome::Success(body),
                Err(e) => AttemptOutcome::Retryable {
                    error: classify_request_error(e),
                    retry_after: None,
                },
            };
        }

        let retry_after = if RETRY_AFTER_STATUSES.contains(&status.as_u16()) {
            parse_retry_after(response.headers())
        } else {
            None
        };
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        let error = CatalogError::Http {
            status: status.as_u16(),
            body,
        };

        if RetryPolicy::is_retryable_status(status) {
            AttemptOutcome::Retryable { error, retry_after }
        } else {
            AttemptOutcome::Fatal(error)
        }
    }
}

fn classify_request_error(error: reqwest::Error) -> CatalogError {
    if error.is_timeout() {
        CatalogError::Timeout(error.to_string())
    } else {
        CatalogError::RequestFailed(error.to_string())
    }
}

/// Parse `Retry-After` as delta-seconds or an HTTP-date.
/// Dates in the past yield a zero delay.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim();

    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    let date = DateTime::parse_from_rfc2822(value).ok()?;
    let remaining = date.with_timezone(&Utc) - Utc::now();
    Some(remaining.to_std().unwrap_or(Duration::ZERO))
}
