// Voicememo - voice memo assistant library
//
// Takes one audio recording and derives artifacts from it:
// - Whisper transcription with per-segment timestamps
// - LLM-generated executive summary (markdown file)
// - LLM-generated slide deck (.pptx)
// - Chat grounded in the transcript

pub mod config;
pub mod export;
pub mod llm;
pub mod prompts;
pub mod session;
pub mod transcription;

pub use config::Config;
pub use export::{export_deck, export_summary, ExportError, PptxBuilder};
pub use llm::{GeminiConfig, GeminiProvider, LlmError, LlmProvider};
pub use session::{
    ChatMessage, ChatRole, DeckError, Screen, Session, SessionState, SummaryError,
    CHAT_ERROR_MARKER,
};
pub use transcription::{
    Transcriber, Transcript, TranscriptSegment, TranscriptionError, WhisperTranscriber,
};

use env_logger::Env;

/// Initialize logging for host binaries and tests.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
}
