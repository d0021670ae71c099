use std::time::Duration;

use async_trait::async_trait;

use crate::types::{
    CodeReviewer, FeedbackEntry, FeedbackKind, ReviewError, Severity, ValidationReport,
    ValidationStatus,
};

const DEFAULT_REVIEW_LATENCY: Duration = Duration::from_millis(1_000);

const DOCSTRING_DELIMITER: &str = "\"\"\"";

/// Fixed documentation block written into session state on a non-error
/// review outcome.
pub const DOCUMENTATION_TEMPLATE: &str = "\
## Generated Code Documentation

### Overview
The generated snippet passed every automated review check.

### Usage
Import the function into your project and call it with the arguments shown
in its docstring. Inputs outside the documented domain raise `ValueError`.

### Review summary
- Syntax check passed
- Style and documentation review complete
- Ready for deployment once unit tests are in place";

/// One entry of the ordered review rule list. Each rule inspects the source
/// text and appends zero or one feedback entry; rules are independent and
/// deliberately asymmetric (some always emit, some emit only on a match).
struct ReviewRule {
    name: &'static str,
    apply: fn(&str) -> Option<FeedbackEntry>,
}

fn rule_syntax(_code: &str) -> Option<FeedbackEntry> {
    // No parsing happens here; the simulated check always passes.
    Some(FeedbackEntry::new(
        FeedbackKind::Syntax,
        Severity::Success,
        "Syntax is valid",
    ))
}

fn rule_documentation(code: &str) -> Option<FeedbackEntry> {
    if code.contains(DOCSTRING_DELIMITER) {
        Some(FeedbackEntry::new(
            FeedbackKind::Documentation,
            Severity::Success,
            "Docstring documentation found",
        ))
    } else {
        Some(FeedbackEntry::new(
            FeedbackKind::Documentation,
            Severity::Warning,
            "Consider adding a docstring to describe the function",
        ))
    }
}

fn rule_error_handling(code: &str) -> Option<FeedbackEntry> {
    // Emits only on a match; the no-match case stays silent.
    code.contains("raise").then(|| {
        FeedbackEntry::new(
            FeedbackKind::ErrorHandling,
            Severity::Success,
            "Error handling for invalid input detected",
        )
    })
}

fn rule_performance(code: &str) -> Option<FeedbackEntry> {
    (code.contains("for") && code.contains("range")).then(|| {
        FeedbackEntry::new(
            FeedbackKind::Performance,
            Severity::Info,
            "Loop over range detected; consider a generator for large inputs",
        )
    })
}

fn rule_testing(_code: &str) -> Option<FeedbackEntry> {
    Some(FeedbackEntry::new(
        FeedbackKind::Testing,
        Severity::Info,
        "Remember to write unit tests for this function",
    ))
}

const RULES: &[ReviewRule] = &[
    ReviewRule {
        name: "syntax",
        apply: rule_syntax,
    },
    ReviewRule {
        name: "documentation",
        apply: rule_documentation,
    },
    ReviewRule {
        name: "error-handling",
        apply: rule_error_handling,
    },
    ReviewRule {
        name: "performance",
        apply: rule_performance,
    },
    ReviewRule {
        name: "testing",
        apply: rule_testing,
    },
];

/// Simulated reviewer backend. Runs the fixed rule list against the snippet
/// text after a configurable latency standing in for a remote analyzer.
pub struct SimulatedReviewer {
    latency: Duration,
}

impl SimulatedReviewer {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_REVIEW_LATENCY,
        }
    }

    /// Overrides the simulated latency. Tests pass `Duration::ZERO`.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn report_for(code: &str) -> ValidationReport {
        let feedback: Vec<FeedbackEntry> =
            RULES.iter().filter_map(|rule| (rule.apply)(code)).collect();
        let status = if feedback
            .iter()
            .any(|entry| entry.severity == Severity::Error)
        {
            ValidationStatus::Error
        } else {
            ValidationStatus::Success
        };
        let documentation =
            (status != ValidationStatus::Error).then(|| DOCUMENTATION_TEMPLATE.to_string());
        ValidationReport {
            status,
            feedback,
            documentation,
        }
    }
}

impl Default for SimulatedReviewer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeReviewer for SimulatedReviewer {
    async fn review(&self, code: &str) -> Result<ValidationReport, ReviewError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let report = Self::report_for(code);
        tracing::debug!(
            status = report.status.as_str(),
            entries = report.feedback.len(),
            rules = RULES.len(),
            "simulated review completed"
        );
        Ok(report)
    }
}
