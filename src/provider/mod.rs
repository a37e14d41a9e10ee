// src/provider/mod.rs — Text generation provider layer

pub mod google;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::infra::errors::FeastError;

/// A hosted text-generation backend. One prompt in, one markdown string out.
/// Implementations make exactly one call per request: no retries, no explicit
/// timeout, and failures carry the backend's raw message.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn models(&self) -> Vec<ModelInfo>;

    async fn generate(&self, request: GenerateRequest) -> Result<String, FeastError>;
}

#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub context_window: u32,
    pub max_output_tokens: u32,
}
