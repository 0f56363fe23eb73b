//! Conversation session state
//!
//! The authoritative record of one conversation, held behind a watch
//! channel so observers render from published snapshots rather than
//! polling.

mod state;
mod store;

#[cfg(test)]
mod proptests;

pub use state::{Message, Role, SessionState, WELCOME_MESSAGE_ID, WELCOME_TEXT};
pub use store::SessionStore;
