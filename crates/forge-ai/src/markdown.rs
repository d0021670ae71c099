//! Markdown fence handling for generated output.
//!
//! Backends frequently wrap code in fenced blocks even when asked not to.
//! The generator pipeline normalizes artifacts down to bare code before they
//! reach session state.

/// Collects every complete fenced block in `text`, in order. The tag is
/// empty for untagged fences.
fn fenced_blocks(text: &str) -> Vec<(String, String)> {
    let mut blocks = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("```") {
        let after = &rest[open + 3..];
        let Some(newline) = after.find('\n') else {
            break;
        };
        let tag = after[..newline].trim().to_string();
        let body = &after[newline + 1..];
        let Some(close) = body.find("```") else {
            break;
        };
        blocks.push((tag, body[..close].trim_end_matches('\n').to_string()));
        rest = &body[close + 3..];
    }
    blocks
}

/// Returns the language tag and payload of the first fenced code block in
/// `text`, if any. The tag is empty for untagged fences.
pub fn extract_first_fenced_code_block(text: &str) -> Option<(String, String)> {
    fenced_blocks(text).into_iter().next()
}

/// Strips markdown fencing from raw backend output.
///
/// Resolution order: the first fence tagged with the requested language
/// anywhere in the text, then the first untagged fence, then a bare ```
/// wrapping with an optional leading language line, then the trimmed raw
/// text as-is.
pub fn normalize_generated_code(raw: &str, language: &str) -> String {
    let trimmed = raw.trim();

    let blocks = fenced_blocks(trimmed);
    if let Some((_, code)) = blocks
        .iter()
        .find(|(tag, _)| tag.eq_ignore_ascii_case(language))
    {
        return code.trim().to_string();
    }
    if let Some((_, code)) = blocks.iter().find(|(tag, _)| tag.is_empty()) {
        return code.trim().to_string();
    }

    if let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    {
        let inner = inner.trim();
        let mut lines = inner.lines();
        if let Some(first) = lines.next() {
            if first.trim().eq_ignore_ascii_case(language) {
                return lines.collect::<Vec<_>>().join("\n").trim().to_string();
            }
        }
        return inner.to_string();
    }

    trimmed.to_string()
}
