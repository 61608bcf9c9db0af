// Artifact Exporters - Summary

use std::io::Write;
use std::path::PathBuf;

use super::ExportError;

/// Write the summary as UTF-8 markdown to a fresh temp file and return its
/// path. Every call creates a new file; callers are expected to cache the
/// path instead of re-exporting unchanged content.
pub fn export_summary(summary: &str) -> Result<PathBuf, ExportError> {
    let mut file = tempfile::Builder::new()
        .prefix("voice_summary_")
        .suffix(".md")
        .tempfile()?;

    file.write_all(summary.as_bytes())?;

    let (_file, path) = file
        .keep()
        .map_err(|e| ExportError::Io(format!("could not persist summary: {}", e)))?;

    log::info!("Summary exported to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_markdown_file_with_md_extension() {
        let path = export_summary("## Summary\n\n- point one\n").unwrap();
        assert_eq!(path.extension().unwrap(), "md");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "## Summary\n\n- point one\n");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn each_export_creates_a_new_file() {
        let first = export_summary("a").unwrap();
        let second = export_summary("a").unwrap();
        assert_ne!(first, second);

        std::fs::remove_file(first).ok();
        std::fs::remove_file(second).ok();
    }
}
