// Session/Navigation Controller
//
// - state.rs: Screen, ChatMessage, SessionState (per-session data + reset)
// - controller.rs: Session (screen handlers, lazy artifact caching)

pub mod controller;
pub mod state;

pub use controller::{DeckError, Session, SummaryError, CHAT_ERROR_MARKER};
pub use state::{ChatMessage, ChatRole, Screen, SessionState};
