//! Text wrapping helpers and dimensional constants for the string array input.
//!
//! Stateless; shared by the input box rendering and the entry list.

/// Border (2) + padding (2) consumed horizontally by the input block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible buffer lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 4;
/// Left border + left padding
pub(super) const CONTENT_OFFSET_X: u16 = 2;
/// Top border
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Build textwrap options for a given inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width after borders and padding. 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Count wrapped lines for the given text, accounting for trailing newlines
/// that textwrap may not represent as empty lines.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);

    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }

    count
}

/// Wrap an accepted entry for the list, prefixing the first line with
/// `prefix` and indenting continuation lines to match.
pub(super) fn wrap_entry(text: &str, prefix: &str, width: u16) -> Vec<String> {
    let indent = " ".repeat(prefix.chars().count());
    let options = textwrap::Options::new((width as usize).max(prefix.len() + 1))
        .break_words(true)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
        .initial_indent(prefix)
        .subsequent_indent(&indent);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_line_count_empty_string() {
        assert_eq!(wrap_line_count("", 20), 1);
    }

    #[test]
    fn wrap_line_count_zero_width() {
        assert_eq!(wrap_line_count("hello", 0), 1);
    }

    #[test]
    fn wrap_line_count_wraps_long_text() {
        assert_eq!(wrap_line_count("aaaa bbbb cccc", 5), 3);
    }

    #[test]
    fn wrap_line_count_trailing_newline_adds_line() {
        assert_eq!(wrap_line_count("hello\n", 20), 2);
    }

    #[test]
    fn wrap_entry_indents_continuation_lines() {
        let lines = wrap_entry("pay off the card", "1. ", 10);
        assert_eq!(lines[0], "1. pay off");
        assert!(lines[1].starts_with("   "));
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn wrap_entry_fills_each_line_greedily() {
        let lines = wrap_entry("aa bb cc dd ee", "1. ", 9);
        assert_eq!(lines, vec!["1. aa bb", "   cc dd", "   ee"]);
    }

    #[test]
    fn char_boundaries_respect_multibyte() {
        let text = "a€b";
        assert_eq!(next_char_boundary(text, 1), 4);
        assert_eq!(prev_char_boundary(text, 4), 1);
        assert_eq!(prev_char_boundary(text, 0), 0);
        assert_eq!(next_char_boundary(text, text.len()), text.len());
    }
}
