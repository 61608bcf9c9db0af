// Artifact Exporters
//
// - summary.rs: summary text -> persisted .md temp file
// - pptx.rs: in-memory OOXML presentation builder
// - deck.rs: headings + transcript + LLM -> persisted .pptx temp file
//
// Exported files are regular temp files that are kept on disk; cleanup is
// left to the OS.

pub mod deck;
pub mod pptx;
pub mod summary;

pub use deck::export_deck;
pub use pptx::PptxBuilder;
pub use summary::export_summary;

use std::fmt;

use crate::llm::LlmError;

/// Error types for export operations
#[derive(Debug)]
pub enum ExportError {
    /// Filesystem failure while persisting an artifact
    Io(String),
    /// Archive serialization failure
    Archive(String),
    /// Upstream generation failed while building slide content
    Generation(LlmError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(msg) => write!(f, "Export I/O failed: {}", msg),
            ExportError::Archive(msg) => write!(f, "Archive serialization failed: {}", msg),
            ExportError::Generation(err) => write!(f, "Slide content generation failed: {}", err),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

impl From<zip::result::ZipError> for ExportError {
    fn from(err: zip::result::ZipError) -> Self {
        ExportError::Archive(err.to_string())
    }
}

impl From<LlmError> for ExportError {
    fn from(err: LlmError) -> Self {
        ExportError::Generation(err)
    }
}
