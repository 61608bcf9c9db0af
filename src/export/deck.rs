// Artifact Exporters - Deck
//
// Turns a title, a block of heading lines, and the transcript into a .pptx:
// one title slide plus one content slide per non-blank heading, with bullet
// points generated per heading by the LLM provider.

use chrono::Local;
use std::io::Write;
use std::path::PathBuf;

use super::pptx::PptxBuilder;
use super::ExportError;
use crate::llm::LlmProvider;
use crate::prompts::slide_prompt;

/// Build and persist the deck. The archive is assembled fully in memory and
/// written to a temp file only once every slide succeeded, so an error midway
/// never leaves a usable-looking partial path behind.
pub async fn export_deck(
    title: &str,
    headings: &str,
    transcript: &str,
    llm: &dyn LlmProvider,
) -> Result<PathBuf, ExportError> {
    let headings: Vec<&str> = headings
        .lines()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .collect();

    let mut builder = PptxBuilder::new();
    builder.add_slide(
        title,
        vec![format!("Generated {}", Local::now().format("%d %b %Y %H:%M"))],
    );

    for heading in &headings {
        log::info!("Generating slide content for '{}'", heading);
        let response = llm.generate(&slide_prompt(heading, transcript)).await?;
        builder.add_slide(*heading, split_bullets(&response));
    }

    let bytes = builder.build()?;

    let mut file = tempfile::Builder::new()
        .prefix("voice_deck_")
        .suffix(".pptx")
        .tempfile()?;
    file.write_all(&bytes)?;
    let (_file, path) = file
        .keep()
        .map_err(|e| ExportError::Io(format!("could not persist deck: {}", e)))?;

    log::info!(
        "Deck with {} slides exported to {}",
        builder.slide_count(),
        path.display()
    );
    Ok(path)
}

/// Split a generated response into bullet lines: non-blank lines with any
/// leading markdown list markers stripped.
fn split_bullets(response: &str) -> Vec<String> {
    response
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(['-', '*', '\u{2022}'])
                .trim()
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{LlmError, LlmProvider};
    use async_trait::async_trait;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use zip::ZipArchive;

    struct StubLlm {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubLlm {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl LlmProvider for StubLlm {
        fn model_id(&self) -> &str {
            "stub"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(LlmError::RequestFailed("blocked".to_string()))
            } else {
                Ok("- first point\n- second point\n\n- third point".to_string())
            }
        }
    }

    #[test]
    fn split_bullets_drops_blank_lines_and_markers() {
        let bullets = split_bullets("- one\n* two\n\n  \u{2022} three\nplain");
        assert_eq!(bullets, vec!["one", "two", "three", "plain"]);
    }

    #[tokio::test]
    async fn deck_has_title_slide_plus_one_per_nonblank_heading() {
        let llm = StubLlm::new(false);
        let path = export_deck("Voice Analysis Report", "Intro\n\n  \nConclusion", "[0.00s] Hi", &llm)
            .await
            .unwrap();

        assert_eq!(path.extension().unwrap(), "pptx");
        assert_eq!(llm.calls.load(Ordering::SeqCst), 2);

        let bytes = std::fs::read(&path).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let slide_parts = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
            .count();
        assert_eq!(slide_parts, 3);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn failed_generation_yields_no_file() {
        let llm = StubLlm::new(true);
        let result = export_deck("Report", "Intro\nConclusion", "[0.00s] Hi", &llm).await;

        match result {
            Err(ExportError::Generation(_)) => {}
            other => panic!("expected generation error, got {:?}", other.map(|p| p.display().to_string())),
        }
    }
}
