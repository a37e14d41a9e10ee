// src/infra/errors.rs — Error types for FridgeFeast

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeastError {
    // Generation failures (surfaced verbatim, never retried)
    #[error("{provider} generation failed: {message}")]
    Generation { provider: String, message: String },

    // User-correctable gates
    #[error("No API key configured. Run `fridgefeast init`, pass --api-key, or set GEMINI_API_KEY.")]
    MissingCredential,

    #[error("No ingredients provided. Add at least one ingredient to generate recipes.")]
    EmptyIngredients,

    // Session import
    #[error("Malformed import payload: {reason}")]
    MalformedImport { reason: String },

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FeastError {
    /// Failures the user can fix by adjusting their input and trying again,
    /// as opposed to infrastructure problems.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            FeastError::MissingCredential
                | FeastError::EmptyIngredients
                | FeastError::Generation { .. }
                | FeastError::MalformedImport { .. }
        )
    }
}
