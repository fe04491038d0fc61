//! Language-model integration for Answerbox.
//!
//! Exposes the [`traits::LlmClient`] interface, the Gemini implementation,
//! and the [`synthesizer::AnswerSynthesizer`] that turns a question plus
//! scraped context into the final user-facing answer.

pub mod gemini;
pub mod synthesizer;
pub mod traits;

pub use gemini::GeminiClient;
pub use synthesizer::AnswerSynthesizer;
