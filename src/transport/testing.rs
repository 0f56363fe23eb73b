//! Mock transports for testing
//!
//! These mocks enable engine testing without real I/O.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::wire::{self, ChatResponse};
use super::{ChatTransport, TransportError};

// ============================================================================
// Mock Transport
// ============================================================================

/// Mock transport that returns queued responses
#[allow(dead_code)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ChatResponse, TransportError>>>,
    /// Record of all message texts sent
    pub sent: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response
    pub fn queue_response(&self, response: ChatResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queue an error response
    pub fn queue_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded message texts
    pub fn sent_messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send(&self, message: &str) -> Result<ChatResponse, TransportError> {
        self.sent.lock().unwrap().push(message.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::network("No mock response queued")))
    }

    fn describe(&self) -> &str {
        "mock"
    }
}

// ============================================================================
// Gated Mock Transport (for in-flight assertions)
// ============================================================================

/// Mock transport that holds each request open until released
pub struct GatedTransport {
    inner: MockTransport,
    /// Notified when a request reaches the transport (for test synchronization)
    pub request_started: Arc<Notify>,
    /// Stores a permit letting one held request proceed
    pub release: Arc<Notify>,
}

#[allow(dead_code)]
impl GatedTransport {
    pub fn new() -> Self {
        Self {
            inner: MockTransport::new(),
            request_started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }

    pub fn queue_response(&self, response: ChatResponse) {
        self.inner.queue_response(response);
    }

    pub fn queue_error(&self, error: TransportError) {
        self.inner.queue_error(error);
    }

    pub fn sent_messages(&self) -> Vec<String> {
        self.inner.sent_messages()
    }
}

impl Default for GatedTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for GatedTransport {
    async fn send(&self, message: &str) -> Result<ChatResponse, TransportError> {
        self.inner.sent.lock().unwrap().push(message.to_string());
        self.request_started.notify_one();
        self.release.notified().await;
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::network("No mock response queued")))
    }

    fn describe(&self) -> &str {
        "gated mock"
    }
}

// ============================================================================
// Response Builders
// ============================================================================

/// A response carrying only message text
#[allow(dead_code)]
pub fn text_response(message: impl Into<String>) -> ChatResponse {
    ChatResponse {
        message: message.into(),
        recommendations: None,
        extracted_data: None,
        missing_fields: None,
        visa_info: None,
    }
}

/// A plausible wire bundle with the given optional numeric fields
#[allow(dead_code)]
pub fn sample_bundle(layovers: Option<u32>, rating: Option<f64>) -> wire::TripBundle {
    wire::TripBundle {
        flight: wire::FlightOffer {
            airline: "Ethiopian Airlines".to_string(),
            price: 850.0,
            departure: None,
            arrival: None,
            layovers,
            legs: None,
            via: None,
        },
        hotel: wire::HotelOffer {
            name: "Hilton Paris Opera".to_string(),
            price_per_night: 220.0,
            rating,
            distance_km: None,
        },
        car_rental: None,
        total_price: 1950.0,
        score: None,
        reasoning: "Best value option".to_string(),
    }
}
