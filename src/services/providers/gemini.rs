/// Google Generative Language API provider
///
/// Calls `models/{model}:generateContent` with a single user turn and asks for
/// a JSON response body. The candidate's text parts are returned unparsed.
use crate::{
    error::{AppError, AppResult},
    services::providers::CompletionProvider,
};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Clone)]
pub struct GeminiProvider {
    http_client: HttpClient,
    api_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url, self.model
        )
    }

    /// Joins the text parts of the first candidate
    fn extract_text(response: GenerateContentResponse) -> AppResult<String> {
        if let Some(reason) = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
        {
            return Err(AppError::ExternalApi(format!(
                "Prompt was blocked: {}",
                reason
            )));
        }

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::MalformedResponse(
                "Gemini response contained no text".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GeminiProvider {
    async fn generate(&self, api_key: &str, prompt: &str) -> AppResult<String> {
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Gemini API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw Gemini API response");

        let parsed: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                tracing::error!(error = %e, "Failed to deserialize Gemini response");
                AppError::MalformedResponse(format!("Failed to parse Gemini response: {}", e))
            })?;

        let text = Self::extract_text(parsed)?;

        tracing::info!(
            model = %self.model,
            chars = text.len(),
            provider = "gemini",
            "Completion received"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
