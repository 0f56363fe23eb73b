//! Watch-backed session store
//!
//! Owns the session state and publishes every change through a
//! [`tokio::sync::watch`] channel. Readers subscribe once and render
//! from snapshots; a slow reader only ever observes the latest value,
//! never a backlog.

use tokio::sync::watch;

use super::state::{Message, SessionState};
use crate::trip::{TripBundle, TripExtraction, VisaInfo};

pub struct SessionStore {
    tx: watch::Sender<SessionState>,
    /// The exact state published at construction; reset restores this,
    /// welcome timestamp included.
    initial: SessionState,
}

impl SessionStore {
    pub fn new() -> Self {
        let initial = SessionState::new();
        let (tx, _rx) = watch::channel(initial.clone());
        Self { tx, initial }
    }

    /// A full copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// A receiver that yields the current state immediately and every
    /// published change afterwards.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    pub fn push_message(&self, message: Message) {
        self.update(|state| state.push_message(message));
    }

    pub fn replace_extraction(&self, extraction: Option<TripExtraction>) {
        self.update(|state| state.replace_extraction(extraction));
    }

    pub fn replace_recommendations(&self, recommendations: Vec<TripBundle>) {
        self.update(|state| state.replace_recommendations(recommendations));
    }

    pub fn replace_visa_info(&self, visa_info: Option<VisaInfo>) {
        self.update(|state| state.replace_visa_info(visa_info));
    }

    pub fn set_busy(&self, busy: bool) {
        self.update(|state| state.set_busy(busy));
    }

    pub fn set_error(&self, error: Option<String>) {
        self.update(|state| state.set_error(error));
    }

    /// Discard the conversation and restore the construction-time state.
    pub fn reset(&self) {
        let initial = self.initial.clone();
        self.update(|state| *state = initial);
    }

    fn update(&self, apply: impl FnOnce(&mut SessionState)) {
        // send_modify publishes even with no live receivers, so mutations
        // never fail and never depend on who is watching.
        self.tx.send_modify(apply);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
