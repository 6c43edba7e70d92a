// Resume translation proxy: one low-temperature completion per request,
// reply parsed as JSON and returned verbatim. All LLM calls go through
// llm_client — no direct provider calls here.

pub mod prompts;

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateResumeRequest {
    pub resume: Option<Value>,
    #[serde(rename = "targetLanguage")]
    pub target_language: Option<String>,
}

/// POST /api/translate-resume
///
/// A malformed provider reply is a 500 that carries the raw payload so the
/// failure can be diagnosed from the client side; every other internal
/// cause stays server-side.
pub async fn handle_translate_resume(
    State(state): State<AppState>,
    Json(req): Json<TranslateResumeRequest>,
) -> Result<Json<Value>, AppError> {
    let resume = req
        .resume
        .filter(|value| !value.is_null())
        .ok_or_else(|| AppError::InvalidRequest("resume is required".into()))?;
    let target_language = req
        .target_language
        .as_deref()
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("targetLanguage is required".into()))?;

    let prompt = prompts::build_translation_prompt(&resume, target_language);
    let translated = state
        .llm
        .complete_json(prompts::TRANSLATE_SYSTEM, &prompt)
        .await
        .map_err(|e| match e {
            LlmError::Unconfigured => AppError::Unconfigured("OPENAI_API_KEY"),
            LlmError::Api { status, .. } => AppError::Upstream {
                service: "openai",
                status,
            },
            LlmError::MalformedReply { raw } => AppError::Translation { raw },
            LlmError::Http(e) => {
                AppError::Internal(anyhow::Error::new(e).context("LLM request failed"))
            }
        })?;

    Ok(Json(translated))
}
