//! Answerbox: question in, web-grounded answer out.
//!
//! One HTTP endpoint drives a three-stage pipeline: resolve search results
//! for the question, scrape the result pages through a headless browser, and
//! synthesize an answer with Gemini over the scraped text.

mod pipeline;
mod rest;

use answerbox_common::observability::{init_logging, LogConfig};
use answerbox_config::AppConfig;
use answerbox_llm::{AnswerSynthesizer, GeminiClient};
use answerbox_web::scrape::ContentExtractor;
use answerbox_web::serp::SearchResolver;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use pipeline::Pipeline;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

pub struct AppState {
    pub pipeline: Pipeline,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_path = init_logging(LogConfig {
        app_name: "answerbox-server",
        ..Default::default()
    })?;
    tracing::info!(target: "server", log_path = %log_path.display(), "logging initialised");

    let cfg = AppConfig::from_env().context(
        "invalid configuration; SERPAPI_KEY and GEMINI_API_KEY must be set in the environment",
    )?;

    let resolver = SearchResolver::new(cfg.serpapi_key.clone(), cfg.max_search_results)
        .context("failed to build search client")?;
    let extractor = ContentExtractor::new(
        cfg.webdriver_url.clone(),
        Duration::from_secs(cfg.page_timeout_secs),
    );
    let gemini = GeminiClient::new(cfg.gemini_api_key.clone(), cfg.gemini_model.clone())?;
    let synthesizer = AnswerSynthesizer::new(Arc::new(gemini));

    let state = Arc::new(AppState {
        pipeline: Pipeline::new(
            Arc::new(resolver),
            Arc::new(extractor),
            Arc::new(synthesizer),
        ),
    });

    let app = router(state, &cfg.origins());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;
    tracing::info!(
        target: "server",
        addr = %cfg.bind_addr,
        model = %cfg.gemini_model,
        "answerbox listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: Arc<AppState>, origins: &[String]) -> Router {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(target: "server", origin = %o, "ignoring unparseable origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(rest::home))
        .route("/api/answer", post(rest::api_answer))
        .with_state(state)
        .layer(cors)
}
