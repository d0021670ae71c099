//! Review seam for the Forge studio.
//!
//! Exposes the `CodeReviewer` trait plus the simulated substring-rule
//! reviewer the studio ships with. The rules are deliberately shallow: the
//! syntax rule performs no parsing and the severity taxonomy exists for
//! future real analyzers.

mod rules;
mod types;

pub use rules::{SimulatedReviewer, DOCUMENTATION_TEMPLATE};
pub use types::{
    CodeReviewer, FeedbackEntry, FeedbackKind, ReviewError, Severity, ValidationReport,
    ValidationStatus,
};
