//! Reqwest-based HTTP client adapter.
//!
//! This module provides the production HTTP client implementation using
//! reqwest, implementing the [`HttpClient`] trait from `crate::traits`.

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Url;
use std::error::Error as _;
use std::time::Duration;

use crate::traits::{HttpClient, HttpError, Response};

/// HTTP client implementation using reqwest.
///
/// Configured with a per-request timeout and with redirect following
/// disabled, so a captive portal answering with a 302 is reported as such,
/// along with its `Location`, instead of being silently followed.
///
/// # Example
///
/// ```ignore
/// use netpulse::adapters::ReqwestHttpClient;
/// use netpulse::traits::HttpClient;
///
/// let client = ReqwestHttpClient::with_timeout(Duration::from_secs(1))?;
/// let response = client.head(&url).await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Build a client with the given request timeout and no redirects.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(Policy::none())
            .build()
            .map(Self::with_client)
            .map_err(Self::convert_error)
    }

    /// Create a new ReqwestHttpClient with a custom reqwest::Client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Convert reqwest error to HttpError.
    ///
    /// reqwest reports DNS and TLS failures as generic connect errors, so
    /// the source chain is inspected to tell them apart. The URL is stripped
    /// first: callers already know it, and a host or path must not decide
    /// the classification.
    fn convert_error(err: reqwest::Error) -> HttpError {
        let err = err.without_url();
        let message = Self::error_chain(&err);
        if err.is_timeout() {
            return HttpError::Timeout(message);
        }
        if err.is_builder() {
            return HttpError::InvalidUrl(message);
        }

        let lower = message.to_lowercase();
        if lower.contains("dns error") || lower.contains("failed to lookup address") {
            HttpError::DnsResolutionFailed(message)
        } else if lower.contains("tls") || lower.contains("certificate") {
            HttpError::Tls(message)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(message)
        } else {
            HttpError::Other(message)
        }
    }

    /// Flatten an error and its sources into one line.
    fn error_chain(err: &reqwest::Error) -> String {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }

    /// The `Location` header, when present and readable.
    fn location(headers: &reqwest::header::HeaderMap) -> Option<String> {
        headers
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn head(&self, url: &Url) -> Result<Response, HttpError> {
        let response = self
            .client
            .head(url.clone())
            .send()
            .await
            .map_err(Self::convert_error)?;

        let mut converted = Response::new(response.status().as_u16());
        converted.location = Self::location(response.headers());
        Ok(converted)
    }
}
