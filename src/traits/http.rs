//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction for the single HTTP operation the
//! probe needs, enabling dependency injection and mocking in tests.

use async_trait::async_trait;
use reqwest::Url;

/// HTTP response wrapper. HEAD responses carry no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// `Location` header, kept so a redirect can say where it points
    pub location: Option<String>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            location: None,
        }
    }

    /// Attach the `Location` header.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// Connection failed
    ConnectionFailed(String),
    /// Host name could not be resolved
    DnsResolutionFailed(String),
    /// Request timeout
    Timeout(String),
    /// TLS handshake or certificate failure
    Tls(String),
    /// Invalid URL or request that could not be built
    InvalidUrl(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::DnsResolutionFailed(msg) => write!(f, "DNS resolution failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            HttpError::Tls(msg) => write!(f, "TLS error: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// Trait for HTTP client operations.
///
/// Implementations include the production reqwest-based client and a
/// scripted mock for tests. Implementations must not follow redirects:
/// a 3xx is reported back as a [`Response`] so the caller can classify it.
///
/// # Example
///
/// ```ignore
/// use netpulse::traits::{HttpClient, HttpError};
///
/// async fn status_of<C: HttpClient>(client: &C, url: &reqwest::Url) -> Result<u16, HttpError> {
///     Ok(client.head(url).await?.status)
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a HEAD request.
    async fn head(&self, url: &Url) -> Result<Response, HttpError>;
}
