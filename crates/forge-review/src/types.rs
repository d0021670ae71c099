use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Enumerates supported `FeedbackKind` values.
pub enum FeedbackKind {
    Syntax,
    Documentation,
    ErrorHandling,
    Performance,
    Testing,
}

impl FeedbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Documentation => "documentation",
            Self::ErrorHandling => "error-handling",
            Self::Performance => "performance",
            Self::Testing => "testing",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Enumerates supported `Severity` values.
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Public struct `FeedbackEntry` used across Forge components.
pub struct FeedbackEntry {
    pub kind: FeedbackKind,
    pub severity: Severity,
    pub message: String,
}

impl FeedbackEntry {
    pub fn new(kind: FeedbackKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Outcome of the most recent review, `None` until one has run.
pub enum ValidationStatus {
    #[default]
    None,
    Success,
    Error,
}

impl ValidationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn is_set(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Public struct `ValidationReport` used across Forge components.
pub struct ValidationReport {
    pub status: ValidationStatus,
    pub feedback: Vec<FeedbackEntry>,
    /// Rendered documentation block, present on non-error outcomes.
    pub documentation: Option<String>,
}

#[derive(Debug, Error)]
/// Enumerates supported `ReviewError` values.
pub enum ReviewError {
    #[error("reviewer is not configured: {0}")]
    Configuration(String),
    #[error("reviewer call failed: {0}")]
    Api(String),
}

#[async_trait]
/// Trait contract for `CodeReviewer` behavior.
///
/// Implementations are non-cancellable: once `review` is awaited the call
/// runs to completion and the caller applies its result unconditionally.
pub trait CodeReviewer: Send + Sync {
    async fn review(&self, code: &str) -> Result<ValidationReport, ReviewError>;
}
