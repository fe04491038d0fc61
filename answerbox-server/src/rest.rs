//! HTTP surface: one answer endpoint plus a liveness probe.
//!
//! Every pipeline outcome is delivered in-band as a JSON `answer` string; the
//! only non-200 response is the 400 for a missing or blank question.

use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

pub const MISSING_QUESTION_MSG: &str = "Missing 'question' in request.";

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Answerbox is running. POST to /api/answer" }))
}

pub async fn api_answer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> (StatusCode, Json<AskResponse>) {
    let question = req.question.trim();
    if question.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(AskResponse {
                answer: MISSING_QUESTION_MSG.to_string(),
            }),
        );
    }

    tracing::info!(target: "server.rest", question_len = question.len(), "answer.request");
    let answer = state.pipeline.run(question).await;
    (StatusCode::OK, Json(AskResponse { answer }))
}
