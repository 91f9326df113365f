//! # StringArrayInput Component
//!
//! Terminal view over an [`EntryListEditor`]: a text box for composing an
//! entry, an `[ Add ]` button, both error lines, and the list of accepted
//! entries.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace, delete, cursor movement)
//! - Add on the `[ Add ]` button (Ctrl+A or mouse click) or Ctrl+Enter
//! - Remove the selected entry (Ctrl+D), select with Up/Down
//! - Render the local validation error and the external error on separate lines
//!
//! ## State Management
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `StringArrayInputState` (cursor, selection, button hit box) lives in `TuiState`
//! - `StringArrayInput` is created each frame, borrowing the editor and that state
//!
//! Entries, buffer and the local error belong to the editor. This component
//! only turns key presses into editor operations and draws the result.

mod cursor;
mod text_wrap;

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding, Paragraph};

use crate::core::entry_list::EntryListEditor;
use crate::core::validation::ValidationResult;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary,
    wrap_entry, wrap_line_count, wrap_options,
};

const ADD_BUTTON: &str = "[ Add ]";
const ADD_HINT: &str = "  Ctrl+A or Ctrl+Enter to add, Ctrl+D to remove selected";

/// High-level events emitted by the StringArrayInput
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Buffer text changed
    Edited,
    /// Cursor or selection moved without changing text
    Moved,
    /// Buffer accepted and appended
    Added,
    /// Add was rejected; the reason is now the local error
    Rejected(String),
    /// Entry at this index was removed
    Removed(usize),
}

/// Presentation state that outlives a single frame.
pub struct StringArrayInputState {
    cursor: CursorState,
    /// Selected entry in the list (target of Ctrl+D)
    pub selected: Option<usize>,
    list_state: ListState,
    /// Where the add button was drawn last frame, for mouse hit testing
    add_button: Rect,
}

impl StringArrayInputState {
    pub fn new() -> Self {
        Self {
            cursor: CursorState::new(),
            selected: None,
            list_state: ListState::default(),
            add_button: Rect::default(),
        }
    }
}

impl Default for StringArrayInputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient wrapper binding the editor to its presentation state.
pub struct StringArrayInput<'a> {
    editor: &'a mut EntryListEditor,
    state: &'a mut StringArrayInputState,
}

impl<'a> StringArrayInput<'a> {
    pub fn new(editor: &'a mut EntryListEditor, state: &'a mut StringArrayInputState) -> Self {
        Self { editor, state }
    }

    /// Height of the input box for the current buffer, clamped to the viewport.
    pub fn input_height(&self, width: u16) -> u16 {
        let lines = wrap_line_count(self.editor.buffer(), inner_width(width));
        lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Apply `change` to a copy of the buffer and hand the result to the editor.
    ///
    /// `change` returns false when it had nothing to do; the editor is then
    /// left alone so a stray key doesn't clear a rejection.
    fn edit(&mut self, change: impl FnOnce(&mut String, &mut usize) -> bool) -> Option<ListEvent> {
        self.state.cursor.clamp(self.editor.buffer());
        let mut text = self.editor.buffer().to_string();
        let mut pos = self.state.cursor.pos;
        if !change(&mut text, &mut pos) {
            return None;
        }
        self.editor.edit_buffer(text);
        self.state.cursor.pos = pos;
        Some(ListEvent::Edited)
    }

    fn move_cursor(&mut self, target: impl FnOnce(&str, usize) -> usize) -> Option<ListEvent> {
        let buffer = self.editor.buffer();
        self.state.cursor.clamp(buffer);
        let next = target(buffer, self.state.cursor.pos);
        (next != self.state.cursor.pos).then(|| {
            self.state.cursor.pos = next;
            ListEvent::Moved
        })
    }

    /// Shared by the button and the confirm chord.
    fn add(&mut self) -> ListEvent {
        match self.editor.add() {
            ValidationResult::Accepted(_) => {
                self.state.cursor.reset();
                ListEvent::Added
            }
            ValidationResult::Rejected(reason) => ListEvent::Rejected(reason),
        }
    }

    fn remove_selected(&mut self) -> Option<ListEvent> {
        let index = self.state.selected?;
        if !self.editor.remove(index) {
            self.state.selected = None;
            return None;
        }
        let len = self.editor.entries().len();
        self.state.selected = (len > 0).then(|| index.min(len - 1));
        debug!("Removed entry {index}, selection now {:?}", self.state.selected);
        Some(ListEvent::Removed(index))
    }

    fn select(&mut self, delta: isize) -> Option<ListEvent> {
        let len = self.editor.entries().len();
        if len == 0 {
            self.state.selected = None;
            return None;
        }
        let next = match self.state.selected {
            None if delta < 0 => len - 1,
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(len - 1),
        };
        let changed = self.state.selected != Some(next);
        self.state.selected = Some(next);
        changed.then_some(ListEvent::Moved)
    }

    fn visible_buffer(&self, width: u16) -> String {
        let buffer = self.editor.buffer();
        if self.state.cursor.scroll_offset == 0 {
            return buffer.to_string();
        }
        let lines = textwrap::wrap(buffer, wrap_options(inner_width(width)));
        let start = (self.state.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());
        lines[start..end].join("\n")
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        self.state.cursor.clamp(self.editor.buffer());
        self.state
            .cursor
            .update_scroll_offset(self.editor.buffer(), area.width);

        let config = self.editor.config();
        let title = format!("{} (max {} words)", config.label, config.max_words);
        let border_color = if self.editor.local_error().is_some() {
            Color::Red
        } else {
            Color::Green
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .padding(Padding::horizontal(1))
            .title(title);

        let paragraph = if self.editor.buffer().is_empty() {
            Paragraph::new(config.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(self.visible_buffer(area.width))
        };
        frame.render_widget(paragraph.block(block), area);

        let (x, y) = self.state.cursor.screen_pos(self.editor.buffer(), area);
        frame.set_cursor_position((x, y));
    }

    fn render_errors(&self, frame: &mut Frame, area: Rect) {
        let surface = self.editor.error_surface();
        if surface.is_empty() {
            return;
        }
        let mut lines = Vec::new();
        if let Some(local) = surface.local {
            lines.push(Line::from(Span::styled(
                format!("✗ {local}"),
                Style::default().fg(Color::Red),
            )));
        }
        if let Some(external) = surface.external {
            lines.push(Line::from(Span::styled(
                format!("! {external}"),
                Style::default().fg(Color::Yellow),
            )));
        }
        frame.render_widget(Paragraph::new(Text::from(lines)), area);
    }

    fn render_entries(&mut self, frame: &mut Frame, area: Rect) {
        let entries = self.editor.entries();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!("Entries ({})", entries.len()));

        if entries.is_empty() {
            let empty = Paragraph::new("Nothing added yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let width = area.width.saturating_sub(2);
        let items: Vec<ListItem> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let lines: Vec<Line> = wrap_entry(entry, &format!("{}. ", i + 1), width)
                    .into_iter()
                    .map(Line::from)
                    .collect();
                ListItem::new(lines)
            })
            .collect();

        self.state.list_state.select(self.state.selected);
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

impl Component for StringArrayInput<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let error_lines = self.editor.error_surface().messages().len() as u16;
        let [input_area, button_area, error_area, list_area] = Layout::vertical([
            Constraint::Length(self.input_height(area.width)),
            Constraint::Length(1),
            Constraint::Length(error_lines),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_input(frame, input_area);

        let button_width = (ADD_BUTTON.len() as u16).min(button_area.width);
        self.state.add_button = Rect {
            width: button_width,
            ..button_area
        };
        let button_line = Line::from(vec![
            Span::styled(
                ADD_BUTTON,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(ADD_HINT, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(button_line), button_area);

        self.render_errors(frame, error_area);
        self.render_entries(frame, list_area);
    }
}

impl EventHandler for StringArrayInput<'_> {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.edit(|text, pos| {
                text.insert(*pos, *c);
                *pos += c.len_utf8();
                true
            }),
            TuiEvent::Newline => self.edit(|text, pos| {
                text.insert(*pos, '\n');
                *pos += 1;
                true
            }),
            TuiEvent::Paste(pasted) => self.edit(|text, pos| {
                text.insert_str(*pos, pasted);
                *pos += pasted.len();
                !pasted.is_empty()
            }),
            TuiEvent::Backspace => self.edit(|text, pos| {
                if *pos == 0 {
                    return false;
                }
                let prev = prev_char_boundary(text, *pos);
                text.drain(prev..*pos);
                *pos = prev;
                true
            }),
            TuiEvent::Delete => self.edit(|text, pos| {
                if *pos >= text.len() {
                    return false;
                }
                let next = next_char_boundary(text, *pos);
                text.drain(*pos..next);
                true
            }),
            TuiEvent::CursorLeft => self.move_cursor(prev_char_boundary),
            TuiEvent::CursorRight => self.move_cursor(|text, pos| {
                if pos < text.len() {
                    next_char_boundary(text, pos)
                } else {
                    pos
                }
            }),
            TuiEvent::CursorHome => self.move_cursor(|text, pos| {
                text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
            }),
            TuiEvent::CursorEnd => self.move_cursor(|text, pos| {
                text[pos..].find('\n').map(|i| pos + i).unwrap_or(text.len())
            }),
            TuiEvent::CursorUp => self.select(-1),
            TuiEvent::CursorDown => self.select(1),
            // Button and chord share one path
            TuiEvent::AddPressed | TuiEvent::Confirm => Some(self.add()),
            TuiEvent::MouseClick(col, row)
                if self.state.add_button.contains(Position::new(*col, *row)) =>
            {
                Some(self.add())
            }
            TuiEvent::RemoveSelected => self.remove_selected(),
            _ => None,
        }
    }
}
