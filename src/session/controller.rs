// Session controller: screen handlers and lazy artifact caching
//
// One handler runs at a time per session (&mut self), matching the
// request-per-interaction model. Sessions share nothing, so there is no
// locking discipline beyond per-session isolation.

use std::path::PathBuf;
use std::sync::Arc;

use super::state::{ChatMessage, Screen, SessionState};
use crate::export::{export_deck, export_summary, ExportError};
use crate::llm::LlmProvider;
use crate::prompts::{chat_prompt, summary_prompt};
use crate::transcription::{Transcriber, TranscriptionError};

/// Marker prefixing chat replies that are really upstream failures, so they
/// can sit inline in the conversation without being mistaken for answers.
pub const CHAT_ERROR_MARKER: &str = "\u{26a0}\u{fe0f}";

/// Errors surfaced by the summary handler.
#[derive(Debug)]
pub enum SummaryError {
    Generation(crate::llm::LlmError),
    Export(ExportError),
    NoTranscript,
}

impl std::fmt::Display for SummaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryError::Generation(err) => write!(f, "Error generating summary: {}", err),
            SummaryError::Export(err) => write!(f, "Error saving summary: {}", err),
            SummaryError::NoTranscript => write!(f, "No transcript to summarize"),
        }
    }
}

impl std::error::Error for SummaryError {}

/// Errors surfaced by the deck handler.
#[derive(Debug)]
pub enum DeckError {
    Export(ExportError),
    NoTranscript,
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::Export(err) => write!(f, "Error building deck: {}", err),
            DeckError::NoTranscript => write!(f, "No transcript to present"),
        }
    }
}

impl std::error::Error for DeckError {}

/// One user session: adapters plus all per-session state.
pub struct Session {
    transcriber: Arc<dyn Transcriber>,
    llm: Arc<dyn LlmProvider>,
    state: SessionState,
}

impl Session {
    pub fn new(transcriber: Arc<dyn Transcriber>, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            transcriber,
            llm,
            state: SessionState::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    /// Route to a screen. Derived-artifact screens require a transcript;
    /// without one the session stays home.
    pub fn navigate(&mut self, screen: Screen) -> Screen {
        self.state.screen = match screen {
            Screen::Home => Screen::Home,
            _ if self.state.has_transcript() => screen,
            _ => {
                log::warn!("Navigation to {:?} refused without a transcript", screen);
                Screen::Home
            }
        };
        self.state.screen
    }

    /// Route to a screen by name; unknown names fall back to home.
    pub fn navigate_by_name(&mut self, name: &str) -> Screen {
        self.navigate(Screen::from_name(name))
    }

    /// Intake a new recording. Transcription runs exactly once per audio
    /// artifact, guarded by "transcript is empty"; attaching audio while a
    /// transcript exists is a no-op until the session is reset.
    pub async fn attach_audio(&mut self, audio_path: PathBuf) -> Result<(), TranscriptionError> {
        if self.state.has_transcript() {
            log::debug!("Transcript already present; ignoring new audio until reset");
            return Ok(());
        }

        let transcript = self.transcriber.transcribe(&audio_path).await?;
        self.state.audio_path = Some(audio_path);
        self.state.transcript = Some(transcript);
        Ok(())
    }

    /// Summary screen handler. Generates and exports at most once per
    /// transcript; later visits render from cache. A failure caches nothing,
    /// so the user can re-trigger.
    pub async fn open_summary(&mut self) -> Result<&str, SummaryError> {
        if self.state.summary.is_none() {
            let transcript = self
                .state
                .transcript
                .as_ref()
                .filter(|t| !t.is_empty())
                .ok_or(SummaryError::NoTranscript)?;

            let summary = self
                .llm
                .generate(&summary_prompt(&transcript.render()))
                .await
                .map_err(SummaryError::Generation)?;
            let path = export_summary(&summary).map_err(SummaryError::Export)?;

            self.state.summary = Some(summary);
            self.state.summary_path = Some(path);
        }

        self.state.screen = Screen::Summary;
        Ok(self.state.summary.as_deref().unwrap_or_default())
    }

    /// Deck screen handler. Builds and caches the deck path at most once per
    /// transcript; a failed build caches nothing and surfaces the error.
    /// Without a transcript the handler refuses and the session stays home,
    /// so a deck can never be cached against audio attached later.
    pub async fn build_deck(&mut self, title: &str, headings: &str) -> Result<PathBuf, DeckError> {
        let transcript = match self.state.transcript.as_ref().filter(|t| !t.is_empty()) {
            Some(transcript) => transcript.render(),
            None => {
                log::warn!("Deck build refused without a transcript");
                return Err(DeckError::NoTranscript);
            }
        };

        self.state.screen = Screen::Deck;

        if let Some(path) = &self.state.deck_path {
            return Ok(path.clone());
        }

        let path = export_deck(title, headings, &transcript, self.llm.as_ref())
            .await
            .map_err(DeckError::Export)?;
        self.state.deck_path = Some(path.clone());
        Ok(path)
    }

    /// Chat handler. Appends the question, asks the provider, and appends the
    /// reply; on failure the reply is an inline marked error string so the
    /// conversation keeps flowing.
    pub async fn ask(&mut self, question: impl Into<String>) -> &str {
        let transcript = match self.state.transcript.as_ref().filter(|t| !t.is_empty()) {
            Some(transcript) => transcript.render(),
            None => {
                log::warn!("Chat refused without a transcript");
                return "\u{26a0}\u{fe0f} Error: record or upload audio before chatting";
            }
        };

        self.state.screen = Screen::Chat;
        self.state.messages.push(ChatMessage::user(question));

        // History includes the question just appended, mirroring how the
        // conversation reads at this point.
        let question = &self.state.messages.last().expect("just pushed").content;
        let prompt = chat_prompt(&transcript, &self.state.messages, question);

        let reply = match self.llm.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                log::warn!("Chat generation failed: {}", err);
                format!("{} Error: {}", CHAT_ERROR_MARKER, err)
            }
        };

        self.state.messages.push(ChatMessage::assistant(reply));
        &self.state.messages.last().expect("just pushed").content
    }

    /// Clear audio, transcript, derived artifacts, and the chat log together,
    /// returning to home.
    pub fn reset(&mut self) {
        log::info!("Session reset");
        self.state.reset();
    }
}
