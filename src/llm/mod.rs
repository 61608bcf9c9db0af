// Generative Text Client Adapter
//
// - provider.rs: LlmProvider trait and LlmError
// - gemini.rs: Gemini generateContent client

pub mod gemini;
pub mod provider;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use provider::{LlmError, LlmProvider};
