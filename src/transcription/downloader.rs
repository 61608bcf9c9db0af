// Transcription Adapter - Model Downloading
//
// Fetches the fixed Whisper model's ggml weights from Hugging Face on first
// use. Downloads go to a `.partial` file that is renamed on completion and
// removed on failure, so an interrupted download neither passes for a usable
// model nor lingers on disk.

use futures_util::{Stream, StreamExt};
use reqwest::Client;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::types::TranscriptionError;

/// The one model this adapter runs. English-only base model, CPU-friendly.
pub const MODEL_NAME: &str = "base.en";

const MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-base.en.bin";

/// Path the model weights live at once downloaded.
pub fn model_path(models_dir: &Path) -> PathBuf {
    models_dir.join(format!("ggml-{}.bin", MODEL_NAME))
}

/// Ensure the model weights exist locally, downloading them if missing.
/// Returns the path to the ready-to-load weights.
pub async fn ensure_model(models_dir: &Path) -> Result<PathBuf, TranscriptionError> {
    let file_path = model_path(models_dir);
    if file_path.exists() {
        return Ok(file_path);
    }

    fs::create_dir_all(models_dir)
        .await
        .map_err(|e| TranscriptionError::DownloadFailed(format!("create models dir: {}", e)))?;

    log::info!("Downloading Whisper model {} from {}", MODEL_NAME, MODEL_URL);

    let response = Client::new()
        .get(MODEL_URL)
        .send()
        .await
        .map_err(|e| TranscriptionError::DownloadFailed(format!("request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(TranscriptionError::DownloadFailed(format!(
            "download failed with status: {}",
            response.status()
        )));
    }

    let total_size = response.content_length().unwrap_or(0);
    log::info!(
        "Model size: {:.1} MB",
        total_size as f64 / (1024.0 * 1024.0)
    );

    let downloaded = persist_stream(response.bytes_stream(), &file_path, total_size).await?;

    log::info!(
        "Model {} downloaded to {} ({} bytes)",
        MODEL_NAME,
        file_path.display(),
        downloaded
    );

    Ok(file_path)
}

/// Stream chunks into `<final_path>.partial`, then rename into place. On any
/// chunk or filesystem error the partial file is removed before the error
/// propagates.
async fn persist_stream<S, B, E>(
    stream: S,
    final_path: &Path,
    total_size: u64,
) -> Result<u64, TranscriptionError>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: fmt::Display,
{
    let partial_path = final_path.with_extension("bin.partial");

    let result = write_chunks(stream, &partial_path, total_size).await;

    match result {
        Ok(downloaded) => {
            fs::rename(&partial_path, final_path).await.map_err(|e| {
                TranscriptionError::DownloadFailed(format!("finalize download: {}", e))
            })?;
            Ok(downloaded)
        }
        Err(err) => {
            if let Err(cleanup) = fs::remove_file(&partial_path).await {
                log::warn!(
                    "Could not remove partial download {}: {}",
                    partial_path.display(),
                    cleanup
                );
            }
            Err(err)
        }
    }
}

async fn write_chunks<S, B, E>(
    mut stream: S,
    partial_path: &Path,
    total_size: u64,
) -> Result<u64, TranscriptionError>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: fmt::Display,
{
    let mut file = fs::File::create(partial_path)
        .await
        .map_err(|e| TranscriptionError::DownloadFailed(format!("create file: {}", e)))?;

    let mut downloaded = 0u64;
    let mut last_progress_report = 0u8;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result
            .map_err(|e| TranscriptionError::DownloadFailed(format!("read chunk: {}", e)))?;
        file.write_all(chunk.as_ref())
            .await
            .map_err(|e| TranscriptionError::DownloadFailed(format!("write chunk: {}", e)))?;

        downloaded += chunk.as_ref().len() as u64;

        if total_size > 0 {
            let progress = ((downloaded as f64 / total_size as f64) * 100.0) as u8;
            if progress >= last_progress_report + 10 {
                log::info!(
                    "Download progress: {}% ({:.1} MB / {:.1} MB)",
                    progress,
                    downloaded as f64 / (1024.0 * 1024.0),
                    total_size as f64 / (1024.0 * 1024.0)
                );
                last_progress_report = progress;
            }
        }
    }

    file.flush()
        .await
        .map_err(|e| TranscriptionError::DownloadFailed(format!("flush: {}", e)))?;

    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;
    use tempfile::tempdir;

    #[test]
    fn model_path_uses_ggml_naming() {
        let path = model_path(Path::new("/models"));
        assert_eq!(path, PathBuf::from("/models/ggml-base.en.bin"));
    }

    #[tokio::test]
    async fn existing_weights_skip_the_network() {
        let dir = tempdir().unwrap();
        let existing = model_path(dir.path());
        fs::create_dir_all(dir.path()).await.unwrap();
        fs::write(&existing, b"weights").await.unwrap();

        let resolved = ensure_model(dir.path()).await.unwrap();
        assert_eq!(resolved, existing);
        assert_eq!(fs::read(&resolved).await.unwrap(), b"weights");
    }

    #[tokio::test]
    async fn complete_stream_is_renamed_into_place() {
        let dir = tempdir().unwrap();
        let final_path = model_path(dir.path());

        let chunks: Vec<Result<Vec<u8>, &str>> = vec![Ok(b"abc".to_vec()), Ok(b"def".to_vec())];
        let downloaded = persist_stream(stream::iter(chunks), &final_path, 6)
            .await
            .unwrap();

        assert_eq!(downloaded, 6);
        assert_eq!(fs::read(&final_path).await.unwrap(), b"abcdef");
        assert!(!final_path.with_extension("bin.partial").exists());
    }

    #[tokio::test]
    async fn failed_stream_removes_the_partial_file() {
        let dir = tempdir().unwrap();
        let final_path = model_path(dir.path());

        let chunks: Vec<Result<Vec<u8>, &str>> = vec![Ok(b"abc".to_vec()), Err("connection reset")];
        let err = persist_stream(stream::iter(chunks), &final_path, 6)
            .await
            .unwrap_err();

        assert!(matches!(err, TranscriptionError::DownloadFailed(_)));
        assert!(!final_path.exists());
        assert!(!final_path.with_extension("bin.partial").exists());
    }
}
