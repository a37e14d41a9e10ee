// src/provider/google.rs — Google Generative AI (Gemini) backend

use async_trait::async_trait;

use super::{GenerateRequest, ModelInfo, TextGenerator};
use crate::infra::errors::FeastError;

pub struct GeminiGenerator {
    api_key: String,
    client: reqwest::Client,
}

impl GeminiGenerator {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn base_url(&self) -> &str {
        "https://generativelanguage.googleapis.com/v1beta"
    }

    /// Build the Gemini request body from a GenerateRequest.
    fn build_request_body(&self, request: &GenerateRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }],
            }],
        });

        let mut gen_config = serde_json::json!({});
        if let Some(max_tokens) = request.max_output_tokens {
            gen_config["maxOutputTokens"] = serde_json::json!(max_tokens);
        }
        if let Some(temp) = request.temperature {
            gen_config["temperature"] = serde_json::json!(temp);
        }
        if gen_config != serde_json::json!({}) {
            body["generationConfig"] = gen_config;
        }

        body
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn id(&self) -> &str {
        "gemini"
    }

    fn name(&self) -> &str {
        "Gemini"
    }

    fn models(&self) -> Vec<ModelInfo> {
        vec![
            ModelInfo {
                id: "gemini-2.0-flash".into(),
                name: "Gemini 2.0 Flash".into(),
                context_window: 1_048_576,
                max_output_tokens: 8_192,
            },
            ModelInfo {
                id: "gemini-2.5-flash".into(),
                name: "Gemini 2.5 Flash".into(),
                context_window: 1_048_576,
                max_output_tokens: 65_536,
            },
            ModelInfo {
                id: "gemini-2.5-pro".into(),
                name: "Gemini 2.5 Pro".into(),
                context_window: 1_048_576,
                max_output_tokens: 65_536,
            },
        ]
    }

    async fn generate(&self, request: GenerateRequest) -> Result<String, FeastError> {
        let body = self.build_request_body(&request);

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url(),
            request.model,
            self.api_key,
        );

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| FeastError::Generation {
                provider: "gemini".into(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(FeastError::Generation {
                provider: "gemini".into(),
                message: format!("HTTP {}: {}", status, error_body),
            });
        }

        let resp: serde_json::Value =
            response.json().await.map_err(|e| FeastError::Generation {
                provider: "gemini".into(),
                message: format!("Failed to parse response: {}", e),
            })?;

        // Concatenate text content from candidates[0].content.parts
        let parts = resp["candidates"][0]["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut content = String::new();
        for part in &parts {
            if let Some(text) = part["text"].as_str() {
                content.push_str(text);
            }
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_places_prompt_in_parts() {
        let g = GeminiGenerator::new("test-key".into());
        let body = g.build_request_body(&GenerateRequest::new("gemini-2.0-flash", "Make soup"));

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Make soup");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_body_includes_generation_config_when_set() {
        let g = GeminiGenerator::new("test-key".into());
        let mut request = GenerateRequest::new("gemini-2.0-flash", "Make soup");
        request.temperature = Some(0.9);
        request.max_output_tokens = Some(2048);

        let body = g.build_request_body(&request);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
        assert!(
            (body["generationConfig"]["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6
        );
    }

    #[test]
    fn test_models_include_default() {
        let g = GeminiGenerator::new("k".into());
        assert!(g.models().iter().any(|m| m.id == "gemini-2.0-flash"));
        assert_eq!(g.id(), "gemini");
    }
}
