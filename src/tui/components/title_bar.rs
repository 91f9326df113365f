//! # TitleBar Component
//!
//! Top status bar: app name, the active settings tab, and the status message.
//!
//! Purely presentational. All three props come from `App`, and the title
//! collapses when there is no status:
//!
//! 1. **With status**: `"Pocketbook | Goals | 2 goals"`
//! 2. **Without**: `"Pocketbook | Goals"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub tab_title: String,
    pub status_message: String,
    /// Show a busy marker while a fetch is running
    pub is_busy: bool,
}

impl TitleBar {
    pub fn new(tab_title: String, status_message: String, is_busy: bool) -> Self {
        Self {
            tab_title,
            status_message,
            is_busy,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Pocketbook | {}", self.tab_title);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.is_busy {
            text.push_str(" …");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
