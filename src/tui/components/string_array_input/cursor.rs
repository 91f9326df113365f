//! Cursor position tracking for the string array input.
//!
//! `CursorState` owns the cursor byte offset and the internal scroll offset.
//! The text itself lives in the `EntryListEditor`, so every method takes
//! `buffer: &str` explicitly.

use super::text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, MAX_VISIBLE_LINES, inner_width, wrap_line_count,
    wrap_options,
};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Line offset for internal scrolling (0 when content fits in viewport)
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Back to the start, used after an accepted add clears the buffer.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Pull `pos` back inside `buffer` and onto a char boundary.
    ///
    /// The buffer can change underneath the cursor (owner resets, accepted
    /// add), so this runs before every edit.
    pub fn clamp(&mut self, buffer: &str) {
        let mut pos = self.pos.min(buffer.len());
        while !buffer.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
    }

    /// Which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }

        let text_before_cursor = &buffer[..self.pos];
        let lines = textwrap::wrap(text_before_cursor, wrap_options(width));
        let mut cursor_line = lines.len().saturating_sub(1) as u16;

        // Cursor right after a newline that textwrap didn't represent
        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            cursor_line += 1;
        }

        cursor_line
    }

    /// Keep the cursor line inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, content_width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Screen position (column, row) of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + CONTENT_OFFSET_X, area.y + CONTENT_OFFSET_Y);
        }

        let cursor_line = self.calculate_line(buffer, area.width);

        // Column counted from the last newline, because textwrap drops
        // trailing spaces from wrapped lines.
        let text_before_cursor = &buffer[..self.pos];
        let last_newline = text_before_cursor
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
        let logical_line_to_cursor = &text_before_cursor[last_newline..];
        let logical_line_wrapped = textwrap::wrap(logical_line_to_cursor, wrap_options(width));

        let cursor_col = if logical_line_wrapped.is_empty() {
            0
        } else {
            let chars_in_prev_segments: usize = logical_line_wrapped
                .iter()
                .take(logical_line_wrapped.len() - 1)
                .map(|seg| seg.chars().count())
                .sum();
            let total_chars = logical_line_to_cursor.chars().count();
            total_chars.saturating_sub(chars_in_prev_segments) as u16
        };

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);
        (
            area.x + CONTENT_OFFSET_X + cursor_col.min(width),
            area.y + CONTENT_OFFSET_Y + visible_line,
        )
    }
}
