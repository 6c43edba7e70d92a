/// LLM client — the single point of entry for chat-completion calls.
///
/// ARCHITECTURAL RULE: no other module may call the provider API directly.
///
/// The translation proxy forwards exactly one request per call: no retries,
/// no streaming. Temperature is fixed low so translations stay literal.
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OPENAI_API_KEY is not configured")]
    Unconfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Provider reply was missing or not valid JSON")]
    MalformedReply { raw: Value },
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Sends one completion request and parses the reply content as JSON.
    /// The prompt must instruct the model to answer with JSON only.
    pub async fn complete_json(&self, system: &str, prompt: &str) -> Result<Value, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::Unconfigured)?;

        let request_body = ChatRequest {
            model: MODEL,
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw: Value = response.json().await?;
        if let Some(total) = raw.pointer("/usage/total_tokens").and_then(Value::as_u64) {
            debug!("LLM call succeeded: total_tokens={total}");
        }

        parse_reply(raw)
    }
}

/// Extracts `choices[0].message.content` and parses it as JSON. The raw
/// payload rides along on failure so the endpoint can echo it back for
/// diagnostics.
pub fn parse_reply(raw: Value) -> Result<Value, LlmError> {
    let content = raw
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_owned);

    let Some(content) = content else {
        return Err(LlmError::MalformedReply { raw });
    };

    match serde_json::from_str(strip_json_fences(&content)) {
        Ok(value) => Ok(value),
        Err(_) => Err(LlmError::MalformedReply { raw }),
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
