//! Process configuration
//!
//! One secret (the Gemini API key) plus the models directory, resolved once
//! at startup from the environment. A `.env` file is honored if present.

use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Environment variable holding the generative-text service credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Optional override for where Whisper model weights are stored.
pub const MODELS_DIR_VAR: &str = "VOICEMEMO_MODELS_DIR";

#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the generative-text service.
    pub gemini_api_key: String,
    /// Directory where Whisper model weights are downloaded and loaded from.
    pub models_dir: PathBuf,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        // Best-effort .env loading; a missing file is not an error.
        dotenvy::dotenv().ok();

        let gemini_api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| anyhow!("{} is not set; the generative backend needs it", API_KEY_VAR))?;

        if gemini_api_key.trim().is_empty() {
            return Err(anyhow!("{} is set but empty", API_KEY_VAR));
        }

        Ok(Self {
            gemini_api_key,
            models_dir: resolve_models_dir(),
        })
    }
}

/// Resolve the models directory: explicit override first, then the platform
/// data directory, then the current directory as a last resort.
pub fn resolve_models_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(MODELS_DIR_VAR) {
        return PathBuf::from(dir);
    }

    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voicememo")
        .join("models")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_dir_override_wins() {
        std::env::set_var(MODELS_DIR_VAR, "/tmp/voicememo-test-models");
        let dir = resolve_models_dir();
        std::env::remove_var(MODELS_DIR_VAR);
        assert_eq!(dir, PathBuf::from("/tmp/voicememo-test-models"));
    }
}
