//! Tabs of the settings shell.

/// One page of the settings shell. Order here is display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Goals,
    Sandbox,
    About,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [SettingsTab::Goals, SettingsTab::Sandbox, SettingsTab::About];

    pub fn title(self) -> &'static str {
        match self {
            SettingsTab::Goals => "Goals",
            SettingsTab::Sandbox => "Sandbox",
            SettingsTab::About => "About",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Cycle forward, wrapping at the end.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle backward, wrapping at the start.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
