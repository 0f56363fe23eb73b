//! Session state types and their pure transitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::trip::{TripBundle, TripExtraction, VisaInfo};

/// Fixed id of the client-generated welcome message.
pub const WELCOME_MESSAGE_ID: &str = "welcome";

/// Greeting that opens every session.
pub const WELCOME_TEXT: &str = "👋 Welcome to Travel Buddie!\n\n\
    I'm here to help you plan your perfect trip. Just tell me:\n\n\
    ✈️ Where you want to go\n\
    📅 Your travel dates\n\
    👥 Number of travelers\n\
    💰 Your budget\n\n\
    For example: \"I want to go to Paris from Addis Ababa next month for 5 days \
    with 2 people, budget $3000\"\n\n\
    Let's start planning! Where would you like to go?";

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One conversation turn, immutable once appended
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Recommendations delivered with this turn, as normalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<TripBundle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction: Option<TripExtraction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_info: Option<VisaInfo>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    /// The canned greeting. Client-generated, so it carries the fixed id
    /// rather than a fresh one.
    pub fn welcome() -> Self {
        Self {
            id: WELCOME_MESSAGE_ID.to_string(),
            ..Self::new(Role::Assistant, WELCOME_TEXT)
        }
    }

    pub fn with_attachments(
        mut self,
        recommendations: Option<Vec<TripBundle>>,
        extraction: Option<TripExtraction>,
        visa_info: Option<VisaInfo>,
    ) -> Self {
        self.recommendations = recommendations;
        self.extraction = extraction;
        self.visa_info = visa_info;
        self
    }

    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: text.into(),
            timestamp: Utc::now(),
            recommendations: None,
            extraction: None,
            visa_info: None,
        }
    }
}

/// The whole conversation at a point in time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionState {
    pub messages: Vec<Message>,
    pub extraction: Option<TripExtraction>,
    /// Last known recommendation set; empty until the first search lands.
    pub recommendations: Vec<TripBundle>,
    pub visa_info: Option<VisaInfo>,
    /// True from request dispatch until merge or recovery finishes.
    pub busy: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::initial(Message::welcome())
    }

    /// Initial state around a specific welcome instance. The store keeps
    /// one welcome message so reset restores an identical state, timestamp
    /// included.
    pub fn initial(welcome: Message) -> Self {
        Self {
            messages: vec![welcome],
            extraction: None,
            recommendations: Vec::new(),
            visa_info: None,
            busy: false,
            error: None,
        }
    }

    // ========================================================================
    // Transitions - deterministic, infallible, no I/O
    // ========================================================================

    /// Append one turn. The log is append-only and insertion-ordered.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Wholesale replace; the server carries known fields forward.
    pub fn replace_extraction(&mut self, extraction: Option<TripExtraction>) {
        self.extraction = extraction;
    }

    /// Wholesale replace; never merged entry-by-entry.
    pub fn replace_recommendations(&mut self, recommendations: Vec<TripBundle>) {
        self.recommendations = recommendations;
    }

    pub fn replace_visa_info(&mut self, visa_info: Option<VisaInfo>) {
        self.visa_info = visa_info;
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
