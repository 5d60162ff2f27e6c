// src/providers/gemini.rs

use reqwest::Client;
use serde_json::{Value, json};
use std::time::Instant;

use crate::config::GeminiConfig;
use crate::errors::{Result, SolveError};
use crate::problem::ProblemInput;
use crate::providers::SolverProvider;

const SYSTEM_INSTRUCTION: &str = "You are a professional mathematician specializing in differential equations. \
The user sends you a differential equation, either as text or as an image. \
Your tasks:\n\
1. Identify the equation and write it in LaTeX.\n\
2. Explain the solution steps in detail, clearly, in English.\n\
3. State the final answer explicitly.\n\
4. Briefly describe the methods and concepts used.\n\n\
Answer in Markdown, using LaTeX ($...$ or $$...$$) for mathematical formulas.";

const TEXT_INSTRUCTION_PREFIX: &str = "Solve this differential equation: ";
const IMAGE_INSTRUCTION: &str = "Identify and solve the differential equation in this image.";

/// A solver backed by Google's Gemini `generateContent` endpoint.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    /// The full request body for one submission. Kept separate from the
    /// network call so the wire shape stays checkable without a server.
    pub fn request_body(&self, input: &ProblemInput) -> Value {
        json!({
            "systemInstruction": {"parts": [{"text": SYSTEM_INSTRUCTION}]},
            "contents": [{"parts": user_parts(input)}],
            "generationConfig": {"temperature": self.config.temperature}
        })
    }
}

/// The user-turn parts for a submission: a single interpolated instruction
/// for text, or the inline image followed by the fixed OCR instruction.
fn user_parts(input: &ProblemInput) -> Vec<Value> {
    match input {
        ProblemInput::Text(text) => {
            vec![json!({"text": format!("{}{}", TEXT_INSTRUCTION_PREFIX, text)})]
        }
        ProblemInput::Image(image) => vec![
            json!({"inlineData": {"mimeType": image.mime_type, "data": image.data}}),
            json!({"text": IMAGE_INSTRUCTION}),
        ],
    }
}

impl SolverProvider for GeminiProvider {
    /// Calls the Gemini API with the submitted problem and returns the
    /// model's response text and latency.
    async fn solve(&self, input: &ProblemInput) -> Result<(String, u64)> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        );

        println!("📡 Calling Gemini: {} with model: {}", url, self.config.model);

        let body = self.request_body(input);

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        println!("📥 Gemini response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(SolveError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let response_json: Value = resp.json().await?;

        if let Some(error) = response_json.get("error") {
            return Err(SolveError::ApiResponse(error.to_string()));
        }

        let output = response_json
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| SolveError::UnexpectedResponse(response_json.to_string()))?;

        if output.is_empty() {
            return Err(SolveError::EmptyResponse);
        }

        Ok((output.to_string(), latency_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ImagePayload;

    fn provider() -> GeminiProvider {
        GeminiProvider::new(
            Client::new(),
            GeminiConfig {
                api_base: "https://generativelanguage.googleapis.com".to_string(),
                api_key: "test-key".to_string(),
                model: "gemini-3-flash-preview".to_string(),
                temperature: 0.2,
            },
        )
    }

    #[test]
    fn text_input_interpolates_the_fixed_template() {
        let body = provider().request_body(&ProblemInput::Text("y'' = -y".to_string()));

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts.as_array().unwrap().len(), 1);
        assert_eq!(
            parts[0]["text"],
            "Solve this differential equation: y'' = -y"
        );
    }

    #[test]
    fn image_input_sends_the_payload_first_then_the_instruction() {
        let input = ProblemInput::Image(ImagePayload {
            mime_type: "image/jpeg".to_string(),
            data: "aGVsbG8=".to_string(),
        });
        let body = provider().request_body(&input);

        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inlineData"]["data"], "aGVsbG8=");
        assert_eq!(parts[1]["text"], IMAGE_INSTRUCTION);
    }

    #[test]
    fn the_system_instruction_and_temperature_ride_along() {
        let body = provider().request_body(&ProblemInput::Text("y' = y".to_string()));

        let instruction = body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(instruction.contains("differential equations"));
        assert!(instruction.contains("Markdown"));
        assert_eq!(body["generationConfig"]["temperature"], 0.2);
    }
}
