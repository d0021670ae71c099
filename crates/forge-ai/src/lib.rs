//! Code generation seam for the Forge studio.
//!
//! Exposes the `CodeGenerator` trait plus the simulated template backend the
//! studio ships with. Real backends slot in behind the same trait.

mod markdown;
mod template;
#[cfg(test)]
mod tests;
mod types;

pub use markdown::{extract_first_fenced_code_block, normalize_generated_code};
pub use template::{
    TemplateGenerator, FACTORIAL_TEMPLATE, FIBONACCI_TEMPLATE, GENERATED_LANGUAGE,
};
pub use types::{CodeArtifact, CodeGenerator, ForgeAiError};
