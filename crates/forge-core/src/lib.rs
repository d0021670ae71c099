//! Foundational low-level utilities shared across Forge crates.
//!
//! Provides the wall-clock timestamp helper used for history ids and a
//! trimmed-text guard used by intent preconditions.

pub mod time_utils;

pub use time_utils::current_unix_timestamp_ms;

/// Returns true when `text` contains at least one non-whitespace character.
pub fn is_non_empty_text(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_unix_timestamp_ms_is_nondecreasing_and_past_epoch() {
        let first = current_unix_timestamp_ms();
        let second = current_unix_timestamp_ms();
        assert!(second >= first);
        // 2020-09-13 in unix ms; any sane clock reads later than this.
        assert!(first > 1_600_000_000_000);
    }

    #[test]
    fn is_non_empty_text_rejects_whitespace_only() {
        assert!(!is_non_empty_text(""));
        assert!(!is_non_empty_text("   \n\t "));
        assert!(is_non_empty_text(" prompt "));
    }
}
