//! Reachability checks against a single fixed endpoint.
//!
//! A probe is one HEAD request with a hard timeout. Success means no
//! transport error and a 2xx status; everything else is a failure carrying
//! the reason. A probe never mutates shared state.

use async_trait::async_trait;
use reqwest::Url;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::ProbeError;
use crate::traits::{HttpClient, Response};

/// Outcome of one probe. Produced per cycle and consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// True iff there was no error and the status was 2xx
    pub succeeded: bool,
    /// Status code when the server answered at all
    pub status_code: Option<u16>,
    /// Why the probe failed, if it did
    pub error: Option<ProbeError>,
    /// Time spent on the request, rounded to the millisecond
    pub latency: Duration,
}

impl ProbeResult {
    pub fn success(status: u16, latency: Duration) -> Self {
        Self {
            succeeded: true,
            status_code: Some(status),
            error: None,
            latency,
        }
    }

    pub fn failure(error: ProbeError, latency: Duration) -> Self {
        Self {
            succeeded: false,
            status_code: None,
            error: Some(error),
            latency,
        }
    }

    /// A server answered, but not with a 2xx.
    pub fn rejected(response: &Response, latency: Duration) -> Self {
        Self {
            succeeded: false,
            status_code: Some(response.status),
            error: Some(ProbeError::from_response(response)),
            latency,
        }
    }

    /// True when the check was abandoned before any request was sent.
    pub fn is_request_construction_failure(&self) -> bool {
        self.error
            .as_ref()
            .is_some_and(ProbeError::is_request_construction)
    }
}

/// Something that can check connectivity once.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Human-readable target, used in "Checking ..." lines.
    fn target(&self) -> &str;

    /// Perform one check. Must return within the probe's timeout.
    async fn check(&self) -> ProbeResult;
}

/// Production probe: a HEAD request through an [`HttpClient`].
pub struct ConnectivityProbe {
    client: Arc<dyn HttpClient>,
    url: String,
    timeout: Duration,
}

impl ConnectivityProbe {
    pub fn new(client: Arc<dyn HttpClient>, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
        }
    }

    /// Build the request target. Failing here is the "could not create
    /// request" condition; nothing is sent.
    fn request_url(&self) -> Result<Url, ProbeError> {
        let url = Url::parse(&self.url).map_err(|e| ProbeError::InvalidRequest {
            url: self.url.clone(),
            message: format!("parse \"{}\": {}", self.url, e),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ProbeError::InvalidRequest {
                url: self.url.clone(),
                message: format!("unsupported protocol scheme \"{}\"", scheme),
            }),
        }
    }
}

/// Round a duration to the nearest millisecond.
pub fn round_to_millis(duration: Duration) -> Duration {
    let micros = duration.as_micros();
    let millis = (micros + 500) / 1000;
    Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
}

#[async_trait]
impl Probe for ConnectivityProbe {
    fn target(&self) -> &str {
        &self.url
    }

    async fn check(&self) -> ProbeResult {
        let url = match self.request_url() {
            Ok(url) => url,
            Err(err) => return ProbeResult::failure(err, Duration::ZERO),
        };

        let start = Instant::now();
        // The client carries its own timeout; this bounds any implementation.
        let outcome = tokio::time::timeout(self.timeout, self.client.head(&url)).await;
        let latency = round_to_millis(start.elapsed());

        match outcome {
            Err(_elapsed) => ProbeResult::failure(
                ProbeError::Timeout {
                    timeout: self.timeout,
                },
                latency,
            ),
            Ok(Err(err)) => {
                ProbeResult::failure(ProbeError::from_http(err, &url, self.timeout), latency)
            }
            Ok(Ok(response)) if response.is_success() => {
                ProbeResult::success(response.status, latency)
            }
            Ok(Ok(response)) => ProbeResult::rejected(&response, latency),
        }
    }
}
