//! Final answer synthesis from a question and scraped context.
//!
//! Prompt assembly is a pure function of (question, context) so the stage is
//! deterministic and unit-testable without a live model; the one model call
//! has no retries and no streaming. Upstream failures become an error-marked
//! answer string because this endpoint always answers in-band.

use crate::traits::LlmClient;
use std::sync::Arc;

const CONTEXT_START: &str = "=== Scraped Web Content Start ===";
const CONTEXT_END: &str = "=== Scraped Web Content End ===";

/// Build the single prompt sent to the model.
///
/// The model is told to answer from the delimited context when it is
/// relevant, to fall back to its own knowledge when it is not, to answer
/// verbosely, and to never cite where the context came from.
pub fn build_prompt(question: &str, context: &str) -> String {
    format!(
        "You are an AI assistant helping the user answer a question using only the \
         provided web data. If no relevant content is found, use your own intelligence.\n\n\
         Give verbose output to the user\n\
         {CONTEXT_START}\n\
         {context}\n\
         {CONTEXT_END}\n\n\
         User's question: {question}\n\
         - Don't give reference to the source.\n\
         - If no data, answer naturally.\n"
    )
}

/// Turns (question, context) into the final answer text.
pub struct AnswerSynthesizer {
    client: Arc<dyn LlmClient>,
}

impl AnswerSynthesizer {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// One model call; the result is trimmed. Errors are absorbed into a
    /// clearly marked answer string rather than failing the request.
    pub async fn synthesize(&self, question: &str, context: &str) -> String {
        let prompt = build_prompt(question, context);

        match self.client.generate(&prompt, None, None, None).await {
            Ok(resp) => resp.text.trim().to_string(),
            Err(e) => {
                tracing::warn!(
                    target: "llm.synthesize",
                    model = self.client.model_name(),
                    error = %e,
                    "synthesize.failed"
                );
                format!("Answer generation failed: {e}")
            }
        }
    }
}
