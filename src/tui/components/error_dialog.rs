//! # Error Dialog Component
//!
//! Centered modal showing an [`ErrorReport`]. While it is open it captures
//! all input; Enter or Esc dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::state::ErrorReport;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Dismiss,
}

pub struct ErrorDialog<'a> {
    pub report: &'a ErrorReport,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(report: &'a ErrorReport) -> Self {
        Self { report }
    }
}

impl Component for ErrorDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 40, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Red))
            .title(Line::from(format!(" {} ", self.report.title)).centered())
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .title_bottom(Line::from(" Enter/Esc Dismiss ").centered())
            .padding(Padding::uniform(1));

        let body = Paragraph::new(self.report.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}

impl EventHandler for ErrorDialog<'_> {
    type Event = DialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::Newline | TuiEvent::Confirm => Some(DialogEvent::Dismiss),
            _ => None,
        }
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_dismiss_keys() {
        let report = ErrorReport::new("Oops", "broken");
        let mut dialog = ErrorDialog::new(&report);
        assert_eq!(dialog.handle_event(&TuiEvent::Escape), Some(DialogEvent::Dismiss));
        assert_eq!(dialog.handle_event(&TuiEvent::Newline), Some(DialogEvent::Dismiss));
        assert_eq!(dialog.handle_event(&TuiEvent::InputChar('q')), None);
        assert_eq!(dialog.handle_event(&TuiEvent::AddPressed), None);
    }

    #[test]
    fn test_render_shows_title_and_message() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let report = ErrorReport::new("Config error", "config parse error: bad key");

        terminal
            .draw(|f| ErrorDialog::new(&report).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Config error"));
        assert!(text.contains("bad key"));
        assert!(text.contains("Dismiss"));
    }

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }
}
