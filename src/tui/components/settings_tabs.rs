//! # SettingsTabs Component
//!
//! Stateless tab strip for the settings shell. The active tab is a prop
//! from `App`; switching happens in `core::update` on Tab / Shift+Tab.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::core::settings::SettingsTab;
use crate::tui::component::Component;

pub struct SettingsTabs {
    pub active: SettingsTab,
}

impl SettingsTabs {
    pub fn new(active: SettingsTab) -> Self {
        Self { active }
    }
}

impl Component for SettingsTabs {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = SettingsTab::ALL.iter().map(|t| t.title());
        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|");
        frame.render_widget(tabs, area);
    }
}
