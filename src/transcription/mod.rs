// Transcription Adapter
//
// Split into focused files:
// - types.rs: Transcript, TranscriptSegment, TranscriptionError
// - audio_loader.rs: WAV decoding, downmix, resample to 16 kHz
// - downloader.rs: One-time Whisper model weight download
// - engine.rs: WhisperTranscriber (context loading and inference)

pub mod audio_loader;
pub mod downloader;
pub mod engine;
pub mod types;

pub use engine::WhisperTranscriber;
pub use types::{Transcript, TranscriptSegment, TranscriptionError};

use async_trait::async_trait;
use std::path::Path;

/// Speech-to-text seam. The session controller only talks to this trait, so
/// tests can drive it with a stub instead of a real Whisper context.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio file at `audio_path` into timestamped segments.
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, TranscriptionError>;
}
