//! # Entry Validation
//!
//! Decides whether a piece of composed text may become an entry.
//!
//! ```text
//! raw input ──trim──► empty?  ──yes──► Rejected("Please enter some text")
//!                       │
//!                       no
//!                       ▼
//!               word_count > max? ──yes──► Rejected("Maximum N words allowed. Current: M words")
//!                       │
//!                       no
//!                       ▼
//!               Accepted(trimmed)
//! ```
//!
//! Words are maximal runs of non-whitespace characters. This is plain
//! whitespace tokenization, not Unicode word segmentation, and must stay
//! that way: scripts written without spaces count as a single word.

/// Default per-entry word ceiling.
pub const DEFAULT_MAX_WORDS: i64 = 50;

/// Rejection reason for input that trims to nothing.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text";

/// Outcome of validating composed text.
///
/// Rejections are ordinary values, not errors: the caller shows the reason
/// to the user and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The trimmed text, ready to be stored.
    Accepted(String),
    /// Human-readable reason, shown verbatim.
    Rejected(String),
}

/// Number of maximal non-whitespace runs in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validate `raw` against a word ceiling.
///
/// A ceiling `<= 0` rejects every non-empty input rather than failing.
pub fn validate(raw: &str, max_words: i64) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::Rejected(EMPTY_INPUT_MESSAGE.to_string());
    }

    let words = word_count(trimmed);
    // usize -> i64 saturates; no realistic input gets near that
    let words_signed = i64::try_from(words).unwrap_or(i64::MAX);
    if words_signed > max_words {
        return ValidationResult::Rejected(format!(
            "Maximum {max_words} words allowed. Current: {words} words"
        ));
    }

    ValidationResult::Accepted(trimmed.to_string())
}
