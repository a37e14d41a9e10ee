// src/speech/mod.rs — Voice dictation collaborator
//
// Dictation is a string-producing seam: whatever implements SpeechCapture
// feeds the ingredient set exactly as typed text would. The recognition
// engine itself is outside the crate; tests script the trait.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("could not make out any words; try again")]
    NotUnderstood,

    #[error("speech service error: {0}")]
    Service(String),
}

/// Produce a single free-text utterance from the user.
#[async_trait]
pub trait SpeechCapture: Send + Sync {
    async fn capture(&self) -> Result<String, SpeechError>;
}

/// Fallback capture for terminals without a recognizer wired in: the
/// "dictation" is read as one line from stdin.
pub struct LineCapture;

#[async_trait]
impl SpeechCapture for LineCapture {
    async fn capture(&self) -> Result<String, SpeechError> {
        use std::io::BufRead;

        eprintln!("  (dictation) speak your ingredients, then press Enter:");
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| SpeechError::Service(e.to_string()))?;

        let utterance = line.trim();
        if utterance.is_empty() {
            return Err(SpeechError::NotUnderstood);
        }
        Ok(utterance.to_string())
    }
}
