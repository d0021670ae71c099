use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Public struct `CodeArtifact` used across Forge components.
pub struct CodeArtifact {
    pub language: String,
    pub code: String,
}

impl CodeArtifact {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug, Error)]
/// Enumerates supported `ForgeAiError` values.
pub enum ForgeAiError {
    #[error("backend is not configured: {0}")]
    Configuration(String),
    #[error("backend call failed: {0}")]
    Api(String),
    #[error("invalid backend response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
/// Trait contract for `CodeGenerator` behavior.
///
/// Implementations are non-cancellable: once `generate` is awaited the call
/// runs to completion and the caller applies its result unconditionally.
pub trait CodeGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<CodeArtifact, ForgeAiError>;
}
