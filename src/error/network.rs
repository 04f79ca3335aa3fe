//! Probe failure classification.
//!
//! Every way a reachability check can fail is represented here, from a
//! target URL that cannot even be turned into a request to a server that
//! answers with the wrong status.

use std::time::Duration;
use thiserror::Error;

use crate::traits::{HttpError, Response};

/// Why a single probe did not count as "connected".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The request could not be constructed (malformed URL, bad scheme).
    #[error("{message}")]
    InvalidRequest { url: String, message: String },

    /// The target host name could not be resolved.
    #[error("DNS resolution failed for '{host}': {message}")]
    DnsResolutionFailed { host: String, message: String },

    /// TCP connect failed (refused, unreachable, reset).
    #[error("connection to '{url}' failed: {message}")]
    ConnectionFailed { url: String, message: String },

    /// No response within the hard per-attempt timeout.
    #[error("request timed out after {}ms", .timeout.as_millis())]
    Timeout { timeout: Duration },

    /// TLS handshake or certificate failure.
    #[error("TLS error: {message}")]
    Tls { message: String },

    /// The server answered with a 3xx. Redirects are not followed; the
    /// target is kept because captive portals announce themselves this way.
    #[error("unexpected redirect (HTTP {status}){}", redirect_target(.location))]
    Redirect {
        status: u16,
        location: Option<String>,
    },

    /// The server answered with a 4xx/5xx or other non-2xx status.
    #[error("unexpected status (HTTP {status})")]
    HttpStatus { status: u16 },

    /// Anything else the transport reported.
    #[error("{message}")]
    Other { message: String },
}

impl ProbeError {
    /// Classify a transport error for the given target.
    pub fn from_http(err: HttpError, url: &reqwest::Url, timeout: Duration) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => ProbeError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::DnsResolutionFailed(message) => ProbeError::DnsResolutionFailed {
                host: url.host_str().unwrap_or_default().to_string(),
                message,
            },
            HttpError::Timeout(_) => ProbeError::Timeout { timeout },
            HttpError::Tls(message) => ProbeError::Tls { message },
            HttpError::InvalidUrl(message) => ProbeError::InvalidRequest {
                url: url.to_string(),
                message,
            },
            HttpError::Other(message) => ProbeError::Other { message },
        }
    }

    /// Classify a non-2xx response.
    pub fn from_response(response: &Response) -> Self {
        let status = response.status;
        if (300..400).contains(&status) {
            ProbeError::Redirect {
                status,
                location: response.location.clone(),
            }
        } else {
            ProbeError::HttpStatus { status }
        }
    }

    /// True when the request never left the host because it could not be built.
    ///
    /// The polling loop treats this as a distinct, FATAL-labeled condition.
    pub fn is_request_construction(&self) -> bool {
        matches!(self, ProbeError::InvalidRequest { .. })
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ProbeError::InvalidRequest { .. } => "E_PROBE_REQUEST",
            ProbeError::DnsResolutionFailed { .. } => "E_NET_DNS",
            ProbeError::ConnectionFailed { .. } => "E_NET_CONN",
            ProbeError::Timeout { .. } => "E_NET_TIMEOUT",
            ProbeError::Tls { .. } => "E_NET_TLS",
            ProbeError::Redirect { .. } => "E_NET_REDIRECT",
            ProbeError::HttpStatus { .. } => "E_NET_HTTP",
            ProbeError::Other { .. } => "E_NET_OTHER",
        }
    }
}

fn redirect_target(location: &Option<String>) -> String {
    location
        .as_deref()
        .map(|target| format!(" to {}", target))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> reqwest::Url {
        reqwest::Url::parse("http://clients3.google.com/generate_204").unwrap()
    }

    #[test]
    fn test_dns_failure_keeps_host() {
        let err = ProbeError::from_http(
            HttpError::DnsResolutionFailed("no such host".to_string()),
            &target(),
            Duration::from_secs(1),
        );
        assert_eq!(
            err,
            ProbeError::DnsResolutionFailed {
                host: "clients3.google.com".to_string(),
                message: "no such host".to_string(),
            }
        );
        assert_eq!(err.error_code(), "E_NET_DNS");
    }

    #[test]
    fn test_timeout_uses_probe_budget() {
        let err = ProbeError::from_http(
            HttpError::Timeout("operation timed out".to_string()),
            &target(),
            Duration::from_millis(1000),
        );
        assert_eq!(err.to_string(), "request timed out after 1000ms");
    }

    #[test]
    fn test_invalid_url_is_request_construction() {
        let err = ProbeError::from_http(
            HttpError::InvalidUrl("builder error".to_string()),
            &target(),
            Duration::from_secs(1),
        );
        assert!(err.is_request_construction());
        assert!(!ProbeError::Timeout {
            timeout: Duration::from_secs(1)
        }
        .is_request_construction());
    }

    #[test]
    fn test_status_classification() {
        let classify = |status| ProbeError::from_response(&Response::new(status));
        assert_eq!(
            classify(301),
            ProbeError::Redirect {
                status: 301,
                location: None
            }
        );
        assert_eq!(classify(308).error_code(), "E_NET_REDIRECT");
        assert_eq!(classify(404), ProbeError::HttpStatus { status: 404 });
        assert_eq!(classify(503), ProbeError::HttpStatus { status: 503 });
        assert_eq!(classify(100), ProbeError::HttpStatus { status: 100 });
    }

    #[test]
    fn test_redirect_keeps_location() {
        let response = Response::new(302).with_location("http://portal.lan/login");
        let err = ProbeError::from_response(&response);
        assert_eq!(
            err,
            ProbeError::Redirect {
                status: 302,
                location: Some("http://portal.lan/login".to_string()),
            }
        );
        assert_eq!(
            err.to_string(),
            "unexpected redirect (HTTP 302) to http://portal.lan/login"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ProbeError::HttpStatus { status: 503 }.to_string(),
            "unexpected status (HTTP 503)"
        );
        assert_eq!(
            ProbeError::Redirect {
                status: 302,
                location: None
            }
            .to_string(),
            "unexpected redirect (HTTP 302)"
        );
        assert_eq!(
            ProbeError::ConnectionFailed {
                url: "http://127.0.0.1:9/".to_string(),
                message: "connection refused".to_string(),
            }
            .to_string(),
            "connection to 'http://127.0.0.1:9/' failed: connection refused"
        );
    }
}
