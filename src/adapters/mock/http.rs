//! Mock HTTP client for testing.
//!
//! Provides a scripted HTTP client that returns queued responses or errors,
//! optionally after a delay, and records every URL it was asked for.

use async_trait::async_trait;
use reqwest::Url;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::traits::{HttpClient, HttpError, Response};

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Answer with this status code
    Status(u16),
    /// Answer with a 3xx pointing at this location
    Redirect(u16, String),
    /// Fail with this error
    Error(HttpError),
    /// Wait, then produce the inner response
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    /// Wrap this response so it is only produced after `delay`.
    pub fn after(self, delay: Duration) -> Self {
        MockResponse::Delayed(delay, Box::new(self))
    }
}

/// Mock HTTP client for testing.
///
/// Responses are consumed in FIFO order; once the queue is empty the
/// default response (if any) is returned for every request.
///
/// # Example
///
/// ```ignore
/// use netpulse::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.push_response(MockResponse::Status(204));
/// client.set_default_response(MockResponse::Status(503));
///
/// let response = client.head(&url).await?;
/// assert_eq!(response.status, 204);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Queued responses, consumed front to back
    queue: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Response used once the queue is drained
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// URLs requested, in order
    requests: Arc<Mutex<Vec<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockHttpClient {
    /// Create a new mock HTTP client with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client that always answers with `response`.
    pub fn always(response: MockResponse) -> Self {
        let client = Self::new();
        client.set_default_response(response);
        client
    }

    /// Queue a response for the next unanswered request.
    pub fn push_response(&self, response: MockResponse) {
        lock(&self.queue).push_back(response);
    }

    /// Set a default response for requests after the queue is drained.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Get all requested URLs.
    pub fn get_requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    fn next_response(&self) -> Option<MockResponse> {
        lock(&self.queue)
            .pop_front()
            .or_else(|| lock(&self.default_response).clone())
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn head(&self, url: &Url) -> Result<Response, HttpError> {
        lock(&self.requests).push(url.to_string());

        let mut next = self.next_response();
        loop {
            match next {
                Some(MockResponse::Status(status)) => return Ok(Response::new(status)),
                Some(MockResponse::Redirect(status, location)) => {
                    return Ok(Response::new(status).with_location(location))
                }
                Some(MockResponse::Error(err)) => return Err(err),
                Some(MockResponse::Delayed(delay, inner)) => {
                    tokio::time::sleep(delay).await;
                    next = Some(*inner);
                }
                None => {
                    return Err(HttpError::Other(format!("No mock response for URL: {}", url)))
                }
            }
        }
    }
}
