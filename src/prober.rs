use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::sleep;

use crate::{ProbeError, ProbeOptions, Result};

#[derive(Clone)]
/// Availability prober for a single HTTP endpoint.
pub struct Prober {
    http: reqwest::Client,
    url: String,
    options: ProbeOptions,
}

impl fmt::Debug for Prober {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prober")
            .field("url", &self.url)
            .field("options", &self.options)
            .finish()
    }
}

impl Prober {
    /// Creates a prober for `url` with default options
    /// (10 attempts, 5 s delay, 10 s request timeout).
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            options: ProbeOptions::default(),
        }
    }

    /// Applies probe options such as attempt count and delay.
    pub fn with_options(mut self, opts: ProbeOptions) -> Self {
        self.options = opts;
        self
    }

    /// The URL this prober targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Performs one attempt: GET the URL and classify the outcome.
    ///
    /// `Ok(())` only for an exact HTTP 200. Any other status is
    /// [`ProbeError::UnexpectedStatus`]; transport failures (refused,
    /// unreachable, timeout) are [`ProbeError::Connection`].
    pub async fn check(&self) -> Result<()> {
        let response = self
            .http
            .get(&self.url)
            .timeout(Duration::from_millis(self.options.timeout_ms))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(ProbeError::UnexpectedStatus {
                status: status.as_u16(),
            })
        }
    }

    /// Probes the endpoint until it responds with HTTP 200 or attempts
    /// run out.
    ///
    /// Returns `true` on the first successful attempt without further
    /// waiting; sleeps `delay_ms` between failed attempts. Connection
    /// errors and unexpected statuses both count as failed attempts.
    /// Never makes more than `max_attempts` requests and never panics.
    pub async fn probe(&self) -> bool {
        for attempt in 1..=self.options.max_attempts {
            match self.check().await {
                Ok(()) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(url = %self.url, attempt, "endpoint is up");
                    return true;
                }
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        url = %self.url,
                        attempt,
                        error = %_err,
                        "attempt failed"
                    );
                }
            }

            // No point sleeping after the last attempt.
            if attempt < self.options.max_attempts {
                sleep(Duration::from_millis(self.options.delay_ms)).await;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{ProbeOptions, Prober};

    #[test]
    fn default_options_match_smoke_test_cadence() {
        let opts = ProbeOptions::default();
        assert_eq!(opts.max_attempts, 10);
        assert_eq!(opts.delay_ms, 5_000);
    }

    #[test]
    fn with_options_replaces_defaults() {
        let prober = Prober::new("http://localhost:3000/login").with_options(ProbeOptions {
            max_attempts: 3,
            delay_ms: 10,
            timeout_ms: 500,
        });
        let debug = format!("{prober:?}");
        assert!(debug.contains("max_attempts: 3"));
        assert!(debug.contains("http://localhost:3000/login"));
    }
}
