// Transcription Adapter - Core Engine
//
// Wraps whisper.cpp with a fixed configuration: base.en model, English,
// CPU inference, f32 compute. The context loads lazily on first use and is
// kept for the adapter's lifetime; model weights download once if missing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use super::audio_loader::load_audio;
use super::downloader::{ensure_model, MODEL_NAME};
use super::types::{Transcript, TranscriptSegment, TranscriptionError};
use super::Transcriber;

/// Transcription language. The base.en model is English-only.
const LANGUAGE: &str = "en";

const BEAM_SIZE: i32 = 5;

pub struct WhisperTranscriber {
    models_dir: PathBuf,
    context: Arc<RwLock<Option<WhisperContext>>>,
}

impl WhisperTranscriber {
    pub fn new(models_dir: PathBuf) -> Self {
        // Suppress verbose whisper.cpp logs
        std::env::set_var("WHISPER_LOG_LEVEL", "1");

        Self {
            models_dir,
            context: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn is_model_loaded(&self) -> bool {
        self.context.read().await.is_some()
    }

    /// Download (if needed) and load the Whisper context. No-op when already
    /// loaded.
    async fn ensure_context(&self) -> Result<(), TranscriptionError> {
        if self.context.read().await.is_some() {
            return Ok(());
        }

        let model_path = ensure_model(&self.models_dir).await?;

        log::info!("Loading Whisper model {} ({})", MODEL_NAME, model_path.display());

        let context_param = WhisperContextParameters {
            use_gpu: false,
            ..Default::default()
        };

        let ctx = WhisperContext::new_with_params(&model_path.to_string_lossy(), context_param)
            .map_err(|e| {
                TranscriptionError::ModelLoadFailed(format!("model {}: {}", MODEL_NAME, e))
            })?;

        *self.context.write().await = Some(ctx);
        log::info!("Whisper model {} loaded (CPU, f32)", MODEL_NAME);
        Ok(())
    }

    fn inference_params() -> FullParams<'static, 'static> {
        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: BEAM_SIZE,
            patience: 1.0,
        });

        params.set_language(Some(LANGUAGE));
        params.set_translate(false);
        // Token timestamps give whisper.cpp's internal alignment per segment.
        params.set_token_timestamps(true);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_suppress_blank(true);
        params.set_no_context(true);

        params
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, TranscriptionError> {
        self.ensure_context().await?;

        let samples = load_audio(audio_path)?;
        let duration_seconds = samples.len() as f64 / 16000.0;
        log::info!(
            "Transcribing {} ({:.1}s of audio)",
            audio_path.display(),
            duration_seconds
        );

        let ctx_lock = self.context.read().await;
        let ctx = ctx_lock
            .as_ref()
            .ok_or_else(|| TranscriptionError::ModelLoadFailed("context missing".to_string()))?;

        let mut state = ctx
            .create_state()
            .map_err(|e| TranscriptionError::InferenceFailed(e.to_string()))?;
        state
            .full(Self::inference_params(), &samples)
            .map_err(|e| TranscriptionError::InferenceFailed(e.to_string()))?;

        let num_segments = state
            .full_n_segments()
            .map_err(|e| TranscriptionError::InferenceFailed(e.to_string()))?;

        let mut segments = Vec::with_capacity(num_segments as usize);
        for i in 0..num_segments {
            let text = match state.full_get_segment_text_lossy(i) {
                Ok(text) => text,
                Err(_) => continue,
            };

            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            // Segment timestamps are in centiseconds.
            let start_cs = state.full_get_segment_t0(i).unwrap_or(0);
            segments.push(TranscriptSegment {
                start: start_cs as f32 / 100.0,
                text: text.to_string(),
            });
        }

        log::info!(
            "Transcription of {} produced {} segments",
            audio_path.display(),
            segments.len()
        );

        Ok(Transcript::new(segments))
    }
}
