//! The request pipeline: resolve search results, extract page content,
//! synthesize an answer. Terminal at the first stage that produces nothing,
//! so later stages are never invoked for a request that already has its
//! outcome.

use answerbox_llm::AnswerSynthesizer;
use answerbox_web::scrape::ContentExtractor;
use answerbox_web::serp::SearchResolver;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

pub const NO_RESULTS_MSG: &str = "No search results found.";
pub const NO_CONTENT_MSG: &str = "No content extracted from search results.";

#[async_trait]
pub trait ResolveSearch: Send + Sync {
    async fn resolve(&self, query: &str) -> Vec<Url>;
}

#[async_trait]
pub trait ExtractContent: Send + Sync {
    async fn extract(&self, urls: &[Url]) -> String;
}

#[async_trait]
pub trait SynthesizeAnswer: Send + Sync {
    async fn synthesize(&self, question: &str, context: &str) -> String;
}

#[async_trait]
impl ResolveSearch for SearchResolver {
    async fn resolve(&self, query: &str) -> Vec<Url> {
        SearchResolver::resolve(self, query).await
    }
}

#[async_trait]
impl ExtractContent for ContentExtractor {
    async fn extract(&self, urls: &[Url]) -> String {
        ContentExtractor::extract(self, urls).await
    }
}

#[async_trait]
impl SynthesizeAnswer for AnswerSynthesizer {
    async fn synthesize(&self, question: &str, context: &str) -> String {
        AnswerSynthesizer::synthesize(self, question, context).await
    }
}

/// Sequences the three stages for one request. No internal parallelism: one
/// search call, one browser batch, one model call, in that order.
pub struct Pipeline {
    resolver: Arc<dyn ResolveSearch>,
    extractor: Arc<dyn ExtractContent>,
    synthesizer: Arc<dyn SynthesizeAnswer>,
}

impl Pipeline {
    pub fn new(
        resolver: Arc<dyn ResolveSearch>,
        extractor: Arc<dyn ExtractContent>,
        synthesizer: Arc<dyn SynthesizeAnswer>,
    ) -> Self {
        Self {
            resolver,
            extractor,
            synthesizer,
        }
    }

    /// Run the pipeline for an already-validated (non-blank) question.
    pub async fn run(&self, question: &str) -> String {
        let links = self.resolver.resolve(question).await;
        if links.is_empty() {
            tracing::info!(target: "pipeline", "pipeline.no_results");
            return NO_RESULTS_MSG.to_string();
        }

        let context = self.extractor.extract(&links).await;
        if context.trim().is_empty() {
            tracing::info!(
                target: "pipeline",
                url_count = links.len(),
                "pipeline.no_content"
            );
            return NO_CONTENT_MSG.to_string();
        }

        tracing::debug!(
            target: "pipeline",
            url_count = links.len(),
            context_len = context.len(),
            "pipeline.synthesizing"
        );
        self.synthesizer.synthesize(question, &context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct StubResolver {
        links: Vec<Url>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ResolveSearch for StubResolver {
        async fn resolve(&self, _query: &str) -> Vec<Url> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.links.clone()
        }
    }

    struct StubExtractor {
        blob: String,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ExtractContent for StubExtractor {
        async fn extract(&self, _urls: &[Url]) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.blob.clone()
        }
    }

    struct StubSynthesizer {
        answer: &'static str,
        calls: AtomicUsize,
        seen_context: Mutex<Option<String>>,
    }

    #[async_trait]
    impl SynthesizeAnswer for StubSynthesizer {
        async fn synthesize(&self, _question: &str, context: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_context.lock().unwrap() = Some(context.to_string());
            self.answer.to_string()
        }
    }

    fn parts(
        links: Vec<Url>,
        blob: &str,
        answer: &'static str,
    ) -> (Arc<StubResolver>, Arc<StubExtractor>, Arc<StubSynthesizer>) {
        (
            Arc::new(StubResolver {
                links,
                calls: AtomicUsize::new(0),
            }),
            Arc::new(StubExtractor {
                blob: blob.to_string(),
                calls: AtomicUsize::new(0),
            }),
            Arc::new(StubSynthesizer {
                answer,
                calls: AtomicUsize::new(0),
                seen_context: Mutex::new(None),
            }),
        )
    }

    fn three_urls() -> Vec<Url> {
        vec![
            Url::parse("https://a.example/").unwrap(),
            Url::parse("https://b.example/").unwrap(),
            Url::parse("https://c.example/").unwrap(),
        ]
    }

    #[tokio::test]
    async fn no_search_results_short_circuits_before_extraction() {
        let (resolver, extractor, synthesizer) = parts(Vec::new(), "ignored", "ignored");
        let pipeline = Pipeline::new(resolver.clone(), extractor.clone(), synthesizer.clone());

        let answer = pipeline.run("anything").await;

        assert_eq!(answer, NO_RESULTS_MSG);
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_extraction_short_circuits_before_synthesis() {
        let (resolver, extractor, synthesizer) = parts(three_urls(), "  \n ", "ignored");
        let pipeline = Pipeline::new(resolver, extractor.clone(), synthesizer.clone());

        let answer = pipeline.run("anything").await;

        assert_eq!(answer, NO_CONTENT_MSG);
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn happy_path_hands_extracted_context_to_the_synthesizer() {
        let blob = "\nName: Prithvi Cafe\nCategory: Cafe\nPrice for two: Rs. 800 for two";
        let (resolver, extractor, synthesizer) = parts(three_urls(), blob, "Here are the cafes.");
        let pipeline = Pipeline::new(resolver, extractor, synthesizer.clone());

        let answer = pipeline.run("best cafes in Mumbai").await;

        assert_eq!(answer, "Here are the cafes.");
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            synthesizer.seen_context.lock().unwrap().as_deref(),
            Some(blob)
        );
    }
}
