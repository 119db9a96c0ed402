//! Client for the external text-generation collaborator.
//!
//! One blocking request/response exchange per ask. The unconfigured and
//! error states both resolve to fixed human-readable notices rather
//! than errors; the caller always gets something printable.

use serde::Deserialize;

use crate::config::CoachConfig;

pub const UNCONFIGURED_NOTICE: &str =
    "AI Coaching is unavailable because the API Key is missing. Please check your configuration.";
pub const CONNECTION_NOTICE: &str =
    "Connection error. Please check your internet or try again later.";
pub const EMPTY_NOTICE: &str = "I couldn't generate a response. Please try again.";

pub struct CoachClient {
    client: reqwest::Client,
    config: CoachConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl CoachClient {
    pub fn new(config: CoachConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Sends one prompt and returns generated text or a fixed notice.
    pub async fn generate(&self, prompt: &str, system_instruction: &str) -> String {
        let Some(api_key) = self.config.api_key.as_ref().filter(|k| !k.is_empty()) else {
            tracing::warn!("Coach API key not configured");
            return UNCONFIGURED_NOTICE.to_string();
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.api_url.trim_end_matches('/'),
            self.config.model,
            api_key
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "systemInstruction": { "parts": [{ "text": system_instruction }] },
        });

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Coach request failed: {}", e);
                return CONNECTION_NOTICE.to_string();
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Coach endpoint returned status {}", response.status());
            return CONNECTION_NOTICE.to_string();
        }

        match response.json::<GenerateResponse>().await {
            Ok(parsed) => extract_text(parsed).unwrap_or_else(|| EMPTY_NOTICE.to_string()),
            Err(e) => {
                tracing::warn!("Failed to parse coach response: {}", e);
                CONNECTION_NOTICE.to_string()
            }
        }
    }
}

fn extract_text(response: GenerateResponse) -> Option<String> {
    let text = response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect::<String>();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
