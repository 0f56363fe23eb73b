//! Assistant service transport abstraction
//!
//! One trait covering both the real HTTP client and the fixture-driven
//! development stand-in. Which implementation runs is decided where the
//! engine is constructed; the engine itself never knows.

mod error;
mod fixture;
mod http;
pub mod wire;

#[cfg(test)]
pub mod testing;

pub use error::{TransportError, TransportErrorKind};
pub use fixture::FixtureTransport;
pub use http::HttpTransport;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for reaching the assistant service
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one user message and await the assistant's reply
    async fn send(&self, message: &str) -> Result<wire::ChatResponse, TransportError>;

    /// Short label for logs (endpoint URL, "fixtures", ...)
    fn describe(&self) -> &str;
}

/// Logging wrapper for transports
pub struct LoggingTransport {
    inner: Arc<dyn ChatTransport>,
    label: String,
}

impl LoggingTransport {
    pub fn new(inner: Arc<dyn ChatTransport>) -> Self {
        let label = inner.describe().to_string();
        Self { inner, label }
    }
}

#[async_trait]
impl ChatTransport for LoggingTransport {
    async fn send(&self, message: &str) -> Result<wire::ChatResponse, TransportError> {
        let start = std::time::Instant::now();
        let result = self.inner.send(message).await;
        let duration = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::info!(
                    transport = %self.label,
                    duration_ms = %duration.as_millis(),
                    has_recommendations = response.recommendations.is_some(),
                    has_extraction = response.extracted_data.is_some(),
                    has_visa_info = response.visa_info.is_some(),
                    "chat request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    transport = %self.label,
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "chat request failed"
                );
            }
        }

        result
    }

    fn describe(&self) -> &str {
        &self.label
    }
}
