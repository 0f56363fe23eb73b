//! Conversation engine
//!
//! Drives one session: accepts user text, calls the transport, and merges
//! the normalized reply into the session store. A turn moves through
//! idle -> sending -> (merging | recovering) -> idle; the in-flight token
//! enforces single-flight structurally, independent of the published busy
//! flag observers render from.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;

use crate::normalize::{normalize, NormalizedResponse};
use crate::session::{Message, SessionState, SessionStore};
use crate::transport::ChatTransport;

/// Fixed assistant reply appended when a turn fails.
const APOLOGY_TEXT: &str =
    "😔 Sorry, I couldn't process your request. Please check your connection and try again.";

pub struct ChatEngine {
    store: SessionStore,
    transport: Arc<dyn ChatTransport>,
    /// Held from acceptance of a message until its turn fully settles.
    in_flight: AtomicBool,
    /// Bumped by reset; a reply whose captured generation no longer
    /// matches belongs to a discarded session and is never merged.
    generation: AtomicU64,
}

impl ChatEngine {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            store: SessionStore::new(),
            transport,
            in_flight: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        }
    }

    /// A full copy of the current session.
    pub fn state(&self) -> SessionState {
        self.store.snapshot()
    }

    /// Subscribe to published session changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.store.subscribe()
    }

    /// Send one user message and merge the assistant's reply.
    ///
    /// Empty input, and input arriving while a request is outstanding,
    /// are ignored without touching state. The trimmed text goes into the
    /// log; the transport receives the text as typed.
    pub async fn send_message(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("ignoring empty message");
            return;
        }

        // One turn at a time. The token is taken before any state change
        // and released on every path out of this function.
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("ignoring message while a request is outstanding");
            return;
        }

        let generation = self.generation.load(Ordering::SeqCst);

        self.store.set_error(None);
        let user = Message::user(trimmed);
        tracing::info!(message_id = %user.id, "dispatching user message");
        self.store.push_message(user);
        self.store.set_busy(true);

        let started = Instant::now();
        let result = self.transport.send(text).await;
        let elapsed = started.elapsed();

        // A reset while the request was outstanding started a fresh
        // session; this reply belongs to the old one.
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::warn!(
                duration_ms = %elapsed.as_millis(),
                "discarding reply from before a session reset"
            );
            self.in_flight.store(false, Ordering::SeqCst);
            return;
        }

        match result {
            Ok(raw) => {
                let NormalizedResponse {
                    message,
                    recommendations,
                    extraction,
                    visa_info,
                } = normalize(raw);

                let merged_extraction = extraction.is_some();
                let merged_recommendations = recommendations
                    .as_ref()
                    .is_some_and(|bundles| !bundles.is_empty());
                let merged_visa_info = visa_info.is_some();

                let assistant = Message::assistant(message).with_attachments(
                    recommendations.clone(),
                    extraction.clone(),
                    visa_info.clone(),
                );
                self.store.push_message(assistant);

                // Each merge is independently conditional; sections the
                // reply left out keep their last known values.
                if extraction.is_some() {
                    self.store.replace_extraction(extraction);
                }
                if let Some(bundles) = recommendations {
                    // An empty list stays attached to the turn but never
                    // clears the last known recommendations.
                    if !bundles.is_empty() {
                        self.store.replace_recommendations(bundles);
                    }
                }
                if visa_info.is_some() {
                    self.store.replace_visa_info(visa_info);
                }

                tracing::info!(
                    duration_ms = %elapsed.as_millis(),
                    merged_extraction,
                    merged_recommendations,
                    merged_visa_info,
                    "assistant turn merged"
                );
            }
            Err(error) => {
                tracing::error!(
                    duration_ms = %elapsed.as_millis(),
                    kind = ?error.kind,
                    error = %error,
                    "turn failed, recovering"
                );
                self.store.set_error(Some(error.to_string()));
                self.store.push_message(Message::assistant(APOLOGY_TEXT));
            }
        }

        self.store.set_busy(false);
        self.in_flight.store(false, Ordering::SeqCst);
    }

    /// Discard the conversation and start over.
    ///
    /// Always legal, including while a request is outstanding: the bumped
    /// generation makes the eventual reply merge into nothing. The token
    /// stays with that request until it settles, so new sends are bounced
    /// until then.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.store.reset();
        tracing::info!("session reset");
    }
}
