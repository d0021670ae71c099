//! Session state for the Forge studio.
//!
//! Holds the single in-memory session a studio run operates on: the prompt,
//! the current snippet, review results, a bounded generation history, and
//! the display tab. State transitions are pure methods so they can be
//! exercised without the async layer or the renderer; `SessionController`
//! composes them with the generator and reviewer seams.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use forge_ai::CodeArtifact;
use forge_review::{FeedbackEntry, ValidationReport, ValidationStatus};

mod controller;

pub use controller::{SessionController, SessionError};

/// Maximum number of retained history entries; oldest are evicted first.
pub const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Enumerates supported `Tab` values.
pub enum Tab {
    #[default]
    Code,
    Docs,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Docs => "docs",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One saved (prompt, snippet) pair from a past generation. Immutable once
/// created.
pub struct HistoryEntry {
    pub id: u64,
    pub prompt: String,
    pub code: String,
    pub timestamp_ms: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Derived read-only workflow progress flags; nothing is gated on them.
pub struct WorkflowIndicators {
    pub code_generated: bool,
    pub validation_complete: bool,
    pub ready_to_deploy: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Guard failures at the intent boundary. The surface renders these as
/// disabled controls rather than hard errors.
pub enum IntentError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("a generation is already in flight")]
    GenerationInFlight,
    #[error("nothing has been generated yet")]
    NothingGenerated,
    #[error("a validation is already in flight")]
    ValidationInFlight,
    #[error("unknown history entry {0}")]
    UnknownHistoryEntry(u64),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Public struct `SessionState` used across Forge components.
pub struct SessionState {
    pub prompt: String,
    pub generated_code: String,
    pub validation_status: ValidationStatus,
    pub feedback: Vec<FeedbackEntry>,
    pub is_generating: bool,
    pub is_validating: bool,
    pub history: Vec<HistoryEntry>,
    pub active_tab: Tab,
    pub documentation: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the prompt text. Unconstrained, always allowed.
    pub fn edit_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    /// Guard for the generation trigger: non-empty prompt, nothing in
    /// flight. Marks the generation as started on success.
    pub fn begin_generation(&mut self) -> Result<(), IntentError> {
        if !forge_core::is_non_empty_text(&self.prompt) {
            return Err(IntentError::EmptyPrompt);
        }
        if self.is_generating {
            return Err(IntentError::GenerationInFlight);
        }
        self.is_generating = true;
        Ok(())
    }

    /// Applies a completed generation: the snippet is overwritten, the
    /// prior status and feedback are dropped as stale, and a history entry
    /// is prepended with the list truncated to `HISTORY_LIMIT`.
    ///
    /// The documentation blob is left alone; only a later review overwrites
    /// it. The docs tab can therefore describe an earlier snippet, the same
    /// staleness the history selector exhibits.
    pub fn apply_generation(&mut self, artifact: CodeArtifact, now_ms: u64) {
        self.generated_code = artifact.code;
        self.validation_status = ValidationStatus::None;
        self.feedback.clear();

        let entry = HistoryEntry {
            id: self.next_history_id(now_ms),
            prompt: self.prompt.clone(),
            code: self.generated_code.clone(),
            timestamp_ms: now_ms,
        };
        self.history.insert(0, entry);
        self.history.truncate(HISTORY_LIMIT);
        self.is_generating = false;
    }

    /// Guard for the validation trigger: a snippet exists, nothing in
    /// flight. Marks the validation as started on success.
    pub fn begin_validation(&mut self) -> Result<(), IntentError> {
        if self.generated_code.is_empty() {
            return Err(IntentError::NothingGenerated);
        }
        if self.is_validating {
            return Err(IntentError::ValidationInFlight);
        }
        self.is_validating = true;
        Ok(())
    }

    /// Applies a completed review: feedback is replaced wholesale, and on a
    /// non-error outcome the documentation block is overwritten.
    pub fn apply_validation(&mut self, report: ValidationReport) {
        self.validation_status = report.status;
        self.feedback = report.feedback;
        if let Some(documentation) = report.documentation {
            self.documentation = documentation;
        }
        self.is_validating = false;
    }

    /// Restores `prompt` and `generated_code` from a stored history entry.
    ///
    /// Review state is intentionally left untouched, so a stale
    /// `validation_status`/`feedback` can describe a snippet other than the
    /// restored one. That mirrors the observed behavior of the surface this
    /// models; see DESIGN.md before changing it.
    pub fn select_history(&mut self, id: u64) -> Result<(), IntentError> {
        let entry = self
            .history
            .iter()
            .find(|entry| entry.id == id)
            .ok_or(IntentError::UnknownHistoryEntry(id))?;
        self.prompt = entry.prompt.clone();
        self.generated_code = entry.code.clone();
        Ok(())
    }

    /// Switches the display tab.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Derives the workflow progress flags from current state.
    pub fn workflow_indicators(&self) -> WorkflowIndicators {
        WorkflowIndicators {
            code_generated: !self.generated_code.is_empty(),
            validation_complete: self.validation_status.is_set(),
            ready_to_deploy: self.validation_status == ValidationStatus::Success,
        }
    }

    /// Ids are time-based but bumped past the newest entry on collision so
    /// they stay unique and strictly decreasing down the list.
    fn next_history_id(&self, now_ms: u64) -> u64 {
        match self.history.first() {
            Some(newest) if now_ms <= newest.id => newest.id + 1,
            _ => now_ms,
        }
    }
}
