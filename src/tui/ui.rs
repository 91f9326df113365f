use crate::core::settings::SettingsTab;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorDialog, SettingsTabs, StringArrayInput, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, Padding, Paragraph, Wrap};

const ABOUT_TEXT: &str = "Pocketbook keeps a short list of savings goals and can pull recent \
    transactions from a banking sandbox.\n\n\
    Goals are free text. Each one is limited to a configurable number of words; \
    edit ~/.pocketbook/config.toml to change the limit, the labels, or the sandbox credentials.";

pub fn draw_ui(frame: &mut Frame, app: &mut App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, tabs_area, body_area, help_area] =
        Layout::vertical([Length(1), Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(
        app.active_tab.title().to_string(),
        app.status_message.clone(),
        app.is_fetching,
    )
    .render(frame, title_area);
    SettingsTabs::new(app.active_tab).render(frame, tabs_area);

    match app.active_tab {
        SettingsTab::Goals => {
            StringArrayInput::new(&mut app.goals, &mut tui.goals_input).render(frame, body_area);
        }
        SettingsTab::Sandbox => draw_sandbox(frame, body_area, app),
        SettingsTab::About => draw_about(frame, body_area),
    }

    frame.render_widget(
        Paragraph::new(help_text(app.active_tab)).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    // Modal goes last so it paints over everything
    if let Some(report) = &app.error {
        ErrorDialog::new(report).render(frame, frame.area());
    }
}

fn help_text(tab: SettingsTab) -> &'static str {
    match tab {
        SettingsTab::Goals => "Tab next page | Ctrl+Enter add | Up/Down select | Ctrl+D remove | Esc quit",
        SettingsTab::Sandbox => "Tab next page | Ctrl+R fetch transactions | Esc quit",
        SettingsTab::About => "Tab next page | Esc quit",
    }
}

fn draw_sandbox(frame: &mut Frame, area: Rect, app: &App) {
    let [info_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let state = if app.is_fetching { "fetching..." } else { "idle" };
    let info = Paragraph::new(Line::from(vec![
        Span::raw("Endpoint: "),
        Span::styled(app.sandbox_endpoint.as_str(), Style::default().fg(Color::Cyan)),
        Span::raw(format!("  ({state})")),
    ]))
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Banking sandbox"),
    );
    frame.render_widget(info, info_area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(format!("Transactions ({})", app.transactions.len()));

    if app.transactions.is_empty() {
        let empty = Paragraph::new("No transactions loaded. Press Ctrl+R to fetch.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, list_area);
        return;
    }

    let items: Vec<ListItem> = app
        .transactions
        .iter()
        .map(|t| {
            let amount_style = if t.amount < 0.0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            let mut spans = vec![
                Span::styled(
                    t.date.format("%Y-%m-%d").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(format!("{:>10.2}", t.amount), amount_style),
                Span::raw("  "),
                Span::raw(t.name.clone()),
            ];
            if t.pending {
                spans.push(Span::styled(
                    " (pending)",
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), list_area);
}

fn draw_about(frame: &mut Frame, area: Rect) {
    let about = Paragraph::new(ABOUT_TEXT)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title("About")
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(about, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::state::ErrorReport;
    use crate::test_support::{sample_transaction, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &mut App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_goals_tab_shows_editor() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&mut app, &mut tui);
        assert!(text.contains("Pocketbook | Goals"));
        assert!(text.contains("Goals (max 5 words)"));
        assert!(text.contains("[ Add ]"));
    }

    #[test]
    fn test_sandbox_tab_lists_transactions() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::NextTab);
        let mut pending = sample_transaction("t2", "Bookshop", 12.0);
        pending.pending = true;
        update(
            &mut app,
            Action::TransactionsLoaded(vec![sample_transaction("t1", "Corner Cafe", 4.5), pending]),
        );

        let text = draw(&mut app, &mut tui);
        assert!(text.contains("Transactions (2)"));
        assert!(text.contains("Corner Cafe"));
        assert!(text.contains("(pending)"));
        assert!(text.contains("https://sandbox.plaid.com"));
    }

    #[test]
    fn test_error_dialog_overlays_body() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        app.error = Some(ErrorReport::new("Config error", "unreadable file"));

        let text = draw(&mut app, &mut tui);
        assert!(text.contains("Config error"));
        assert!(text.contains("unreadable file"));
    }

    #[test]
    fn test_about_tab() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::PrevTab);
        let text = draw(&mut app, &mut tui);
        assert!(text.contains("Pocketbook keeps"));
    }
}
