use std::sync::Arc;

use thiserror::Error;

use forge_ai::{CodeGenerator, ForgeAiError};
use forge_core::current_unix_timestamp_ms;
use forge_review::{CodeReviewer, ReviewError};

use crate::{IntentError, SessionState, Tab};

#[derive(Debug, Error)]
/// Enumerates supported `SessionError` values.
pub enum SessionError {
    #[error(transparent)]
    Intent(#[from] IntentError),
    #[error("generation failed: {0}")]
    Generation(#[from] ForgeAiError),
    #[error("review failed: {0}")]
    Review(#[from] ReviewError),
}

/// Owns the session state and the two backend seams, exposing the intents
/// the interactive surface triggers. One controller per studio run; intents
/// take `&mut self`, so the session behaves as a single logical actor.
pub struct SessionController {
    state: SessionState,
    generator: Arc<dyn CodeGenerator>,
    reviewer: Arc<dyn CodeReviewer>,
}

impl SessionController {
    pub fn new(generator: Arc<dyn CodeGenerator>, reviewer: Arc<dyn CodeReviewer>) -> Self {
        Self {
            state: SessionState::new(),
            generator,
            reviewer,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn edit_prompt(&mut self, text: impl Into<String>) {
        self.state.edit_prompt(text);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.state.select_tab(tab);
    }

    /// Restores the history entry at display position `position` (1 =
    /// newest), matching the numbering the history panel renders. Guard
    /// failures echo the position as typed.
    pub fn select_history_position(&mut self, position: usize) -> Result<(), SessionError> {
        let id = position
            .checked_sub(1)
            .and_then(|index| self.state.history.get(index))
            .map(|entry| entry.id)
            .ok_or(IntentError::UnknownHistoryEntry(position as u64))?;
        self.state.select_history(id)?;
        tracing::debug!(position, id, "history entry restored");
        Ok(())
    }

    /// Runs the generator against the current prompt and applies the result.
    /// Non-cancellable: once the backend call starts, its side effects land
    /// even if the prompt was edited meanwhile.
    pub async fn submit_prompt(&mut self) -> Result<(), SessionError> {
        self.state.begin_generation()?;
        let prompt = self.state.prompt.clone();
        let result = self.generator.generate(&prompt).await;
        match result {
            Ok(artifact) => {
                self.state
                    .apply_generation(artifact, current_unix_timestamp_ms());
                tracing::info!(
                    history_len = self.state.history.len(),
                    "generation applied to session"
                );
                Ok(())
            }
            Err(error) => {
                self.state.is_generating = false;
                Err(error.into())
            }
        }
    }

    /// Runs the reviewer against whatever snippet state currently holds and
    /// applies the report. No cross-lock with generation.
    pub async fn run_validation(&mut self) -> Result<(), SessionError> {
        self.state.begin_validation()?;
        let code = self.state.generated_code.clone();
        let result = self.reviewer.review(&code).await;
        match result {
            Ok(report) => {
                tracing::info!(
                    status = report.status.as_str(),
                    entries = report.feedback.len(),
                    "review applied to session"
                );
                self.state.apply_validation(report);
                Ok(())
            }
            Err(error) => {
                self.state.is_validating = false;
                Err(error.into())
            }
        }
    }
}
