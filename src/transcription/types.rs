// Transcription Adapter - Types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error types for transcription operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TranscriptionError {
    /// Audio file could not be read or decoded
    AudioLoad(String),
    /// Model weight download failed
    DownloadFailed(String),
    /// Whisper context failed to load
    ModelLoadFailed(String),
    /// Inference on the audio failed
    InferenceFailed(String),
}

impl fmt::Display for TranscriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptionError::AudioLoad(msg) => write!(f, "Failed to load audio: {}", msg),
            TranscriptionError::DownloadFailed(msg) => write!(f, "Model download failed: {}", msg),
            TranscriptionError::ModelLoadFailed(msg) => write!(f, "Failed to load model: {}", msg),
            TranscriptionError::InferenceFailed(msg) => write!(f, "Transcription failed: {}", msg),
        }
    }
}

impl std::error::Error for TranscriptionError {}

/// One aligned span of speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Segment start offset from the beginning of the audio, in seconds.
    pub start: f32,
    /// Recognized text, trimmed.
    pub text: String,
}

/// Ordered, immutable transcript of one recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// Build a transcript from segments already ordered by start time.
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[TranscriptSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Render the transcript as `"[<start>s] <text>"` lines, one per segment.
    /// This is the form shown to users and interpolated into prompts.
    pub fn render(&self) -> String {
        self.segments
            .iter()
            .map(|seg| format!("[{:.2}s] {}", seg.start, seg.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_formats_timestamps_with_two_decimals() {
        let transcript = Transcript::new(vec![TranscriptSegment {
            start: 0.0,
            text: "Hello world".to_string(),
        }]);

        assert_eq!(transcript.render(), "[0.00s] Hello world");
    }

    #[test]
    fn render_joins_segments_with_newlines() {
        let transcript = Transcript::new(vec![
            TranscriptSegment {
                start: 0.0,
                text: "First".to_string(),
            },
            TranscriptSegment {
                start: 2.5,
                text: "Second".to_string(),
            },
        ]);

        assert_eq!(transcript.render(), "[0.00s] First\n[2.50s] Second");
    }

    #[test]
    fn empty_transcript_renders_empty() {
        let transcript = Transcript::default();
        assert!(transcript.is_empty());
        assert_eq!(transcript.render(), "");
    }
}
