use std::time::Duration;

use async_trait::async_trait;

use crate::markdown::normalize_generated_code;
use crate::types::{CodeArtifact, CodeGenerator, ForgeAiError};

/// Language tag attached to every simulated artifact.
pub const GENERATED_LANGUAGE: &str = "python";

const DEFAULT_GENERATION_LATENCY: Duration = Duration::from_millis(1_500);

/// Fixed template returned for prompts mentioning "factorial".
pub const FACTORIAL_TEMPLATE: &str = r#"def factorial(n):
    """Return the factorial of a non-negative integer."""
    if n < 0:
        raise ValueError("factorial is undefined for negative numbers")
    if n <= 1:
        return 1
    return n * factorial(n - 1)"#;

/// Fixed template returned for prompts mentioning "fibonacci".
pub const FIBONACCI_TEMPLATE: &str = r#"def fibonacci(n):
    """Return a list of the first n Fibonacci numbers."""
    if n < 0:
        raise ValueError("fibonacci is undefined for negative numbers")
    sequence = []
    current, following = 0, 1
    for _ in range(n):
        sequence.append(current)
        current, following = following, current + following
    return sequence"#;

fn render_factorial(_prompt: &str) -> String {
    FACTORIAL_TEMPLATE.to_string()
}

fn render_fibonacci(_prompt: &str) -> String {
    FIBONACCI_TEMPLATE.to_string()
}

fn render_placeholder(prompt: &str) -> String {
    format!("# Auto-generated placeholder\n# Prompt: {prompt}\ndef solution():\n    pass")
}

/// One entry of the ordered strategy table: a keyword matcher (case
/// insensitive substring; `None` matches everything) and the template
/// renderer it selects. First match wins.
struct TemplateStrategy {
    name: &'static str,
    keyword: Option<&'static str>,
    render: fn(&str) -> String,
}

impl TemplateStrategy {
    fn matches(&self, prompt: &str) -> bool {
        match self.keyword {
            Some(keyword) => prompt.to_lowercase().contains(keyword),
            None => true,
        }
    }
}

const STRATEGIES: &[TemplateStrategy] = &[
    TemplateStrategy {
        name: "factorial",
        keyword: Some("factorial"),
        render: render_factorial,
    },
    TemplateStrategy {
        name: "fibonacci",
        keyword: Some("fibonacci"),
        render: render_fibonacci,
    },
    TemplateStrategy {
        name: "placeholder",
        keyword: None,
        render: render_placeholder,
    },
];

/// Simulated generator backend. Maps a free-text prompt onto one of the
/// fixed templates after a configurable latency standing in for a remote
/// backend call.
pub struct TemplateGenerator {
    latency: Duration,
}

impl TemplateGenerator {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_GENERATION_LATENCY,
        }
    }

    /// Overrides the simulated latency. Tests pass `Duration::ZERO`.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn select(prompt: &str) -> (&'static str, String) {
        // The table always terminates at the placeholder fallback.
        let strategy = STRATEGIES
            .iter()
            .find(|strategy| strategy.matches(prompt))
            .unwrap_or(&STRATEGIES[STRATEGIES.len() - 1]);
        (strategy.name, (strategy.render)(prompt))
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeGenerator for TemplateGenerator {
    async fn generate(&self, prompt: &str) -> Result<CodeArtifact, ForgeAiError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let (strategy, raw) = Self::select(prompt);
        let code = normalize_generated_code(&raw, GENERATED_LANGUAGE);
        tracing::debug!(
            strategy,
            prompt_chars = prompt.chars().count(),
            code_chars = code.chars().count(),
            "template generation completed"
        );
        Ok(CodeArtifact::new(GENERATED_LANGUAGE, code))
    }
}
