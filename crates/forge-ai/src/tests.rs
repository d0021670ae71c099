use std::time::Duration;

use crate::{
    extract_first_fenced_code_block, normalize_generated_code, CodeGenerator, TemplateGenerator,
    FACTORIAL_TEMPLATE, FIBONACCI_TEMPLATE, GENERATED_LANGUAGE,
};

fn zero_latency_generator() -> TemplateGenerator {
    TemplateGenerator::with_latency(Duration::ZERO)
}

#[tokio::test]
async fn unit_factorial_prompt_selects_factorial_template() {
    let generator = zero_latency_generator();
    let artifact = generator
        .generate("Write a FACTORIAL function please")
        .await
        .expect("generation succeeds");
    assert_eq!(artifact.code, FACTORIAL_TEMPLATE);
    assert_eq!(artifact.language, GENERATED_LANGUAGE);
}

#[tokio::test]
async fn unit_fibonacci_prompt_selects_fibonacci_template() {
    let generator = zero_latency_generator();
    let artifact = generator
        .generate("please compute Fibonacci numbers")
        .await
        .expect("generation succeeds");
    assert_eq!(artifact.code, FIBONACCI_TEMPLATE);
}

#[tokio::test]
async fn functional_factorial_wins_over_fibonacci_when_both_present() {
    let generator = zero_latency_generator();
    let artifact = generator
        .generate("factorial or fibonacci, whichever")
        .await
        .expect("generation succeeds");
    assert_eq!(artifact.code, FACTORIAL_TEMPLATE);
}

#[tokio::test]
async fn functional_unmatched_prompt_embeds_literal_prompt_in_placeholder() {
    let generator = zero_latency_generator();
    let prompt = "sort a list of tuples by second element";
    let artifact = generator
        .generate(prompt)
        .await
        .expect("generation succeeds");
    assert!(artifact.code.contains(&format!("# Prompt: {prompt}")));
    assert!(artifact.code.contains("def solution():"));
}

#[test]
fn unit_factorial_template_token_profile_is_stable() {
    assert!(FACTORIAL_TEMPLATE.contains("\"\"\""));
    assert!(FACTORIAL_TEMPLATE.contains("raise"));
    assert!(!FACTORIAL_TEMPLATE.contains("range"));
}

#[test]
fn unit_fibonacci_template_token_profile_is_stable() {
    assert!(FIBONACCI_TEMPLATE.contains("\"\"\""));
    assert!(FIBONACCI_TEMPLATE.contains("raise"));
    assert!(FIBONACCI_TEMPLATE.contains("for"));
    assert!(FIBONACCI_TEMPLATE.contains("range"));
}

#[test]
fn unit_extract_first_fenced_code_block_returns_tag_and_payload() {
    assert_eq!(
        extract_first_fenced_code_block(
            "Here is the function:\n```python\ndef f():\n    return 1\n```\nHope that helps."
        ),
        Some(("python".to_string(), "def f():\n    return 1".to_string()))
    );
}

#[test]
fn unit_extract_first_fenced_code_block_handles_untagged_fence() {
    assert_eq!(
        extract_first_fenced_code_block("```\nx = 1\n```"),
        Some((String::new(), "x = 1".to_string()))
    );
}

#[test]
fn functional_normalize_strips_language_tagged_fence() {
    let raw = "```python\ndef f():\n    pass\n```";
    assert_eq!(
        normalize_generated_code(raw, "python"),
        "def f():\n    pass"
    );
}

#[test]
fn functional_normalize_strips_untagged_fence() {
    assert_eq!(normalize_generated_code("```\nx = 1\n```", "python"), "x = 1");
}

#[test]
fn regression_normalize_is_identity_for_bare_templates() {
    assert_eq!(
        normalize_generated_code(FACTORIAL_TEMPLATE, "python"),
        FACTORIAL_TEMPLATE
    );
    assert_eq!(
        normalize_generated_code(FIBONACCI_TEMPLATE, "python"),
        FIBONACCI_TEMPLATE
    );
}

#[test]
fn regression_normalize_prefers_language_tagged_fence_over_earlier_foreign_one() {
    let raw = "```rust\nlet x = 1;\n```\n```python\ndef f():\n    pass\n```";
    assert_eq!(
        normalize_generated_code(raw, "python"),
        "def f():\n    pass"
    );
}

#[test]
fn regression_normalize_falls_back_to_untagged_fence_after_foreign_one() {
    let raw = "```rust\nlet x = 1;\n```\n```\ndef f():\n    pass\n```";
    assert_eq!(
        normalize_generated_code(raw, "python"),
        "def f():\n    pass"
    );
}

#[test]
fn regression_normalize_keeps_foreign_language_tag_line_out_of_scope() {
    // A fence tagged with a different language is not silently retagged; the
    // bare-wrapping fallback keeps the tag line visible to the caller.
    assert_eq!(
        normalize_generated_code("```rust\nlet x = 1;\n```", "python"),
        "rust\nlet x = 1;"
    );
}
