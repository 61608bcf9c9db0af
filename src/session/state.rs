// Session state: screens, chat log, cached artifacts

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::transcription::Transcript;

/// The four screens of the assistant. Anything unrecognized routes home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Home,
    Summary,
    Deck,
    Chat,
}

impl Screen {
    /// Resolve a screen by name, falling back to `Home` for unknown input.
    pub fn from_name(name: &str) -> Self {
        match name {
            "home" => Screen::Home,
            "summary" => Screen::Summary,
            "deck" => Screen::Deck,
            "chat" => Screen::Chat,
            _ => Screen::Home,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Home
    }
}

/// Role of a message in the chat log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A message in the chat log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// All mutable state of one user session.
///
/// Derived artifacts (summary text, summary file, deck file) are caches keyed
/// by the current transcript: they are filled at most once while the
/// transcript lives, and only `reset` clears them — together with the
/// transcript, so nothing can go stale piecemeal.
#[derive(Debug, Default)]
pub struct SessionState {
    pub screen: Screen,
    pub audio_path: Option<PathBuf>,
    pub transcript: Option<Transcript>,
    pub summary: Option<String>,
    pub summary_path: Option<PathBuf>,
    pub deck_path: Option<PathBuf>,
    pub messages: Vec<ChatMessage>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_transcript(&self) -> bool {
        self.transcript.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Atomic clear: audio, transcript, derived artifacts, and chat log go
    /// together, and the session returns home.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
