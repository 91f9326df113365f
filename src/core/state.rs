//! # Application State
//!
//! Core business state for Pocketbook. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── active_tab: SettingsTab          // which settings page is showing
//! ├── goals: EntryListEditor           // the bounded goals editor
//! ├── saved_goals: Vec<String>         // owner's copy, fed by change notifications
//! ├── goals_required: bool             // drives the external error
//! ├── status_message: String           // status bar text
//! ├── error: Option<ErrorReport>       // modal error dialog
//! ├── sandbox_endpoint: String         // shown on the Sandbox tab
//! ├── transactions: Vec<Transaction>   // last successful fetch
//! └── is_fetching: bool                // fetch in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The goals editor is the exception: it mutates itself on key input and
//! reports the result back as `Action::GoalsChanged`.

use crate::api::Transaction;
use crate::core::config::ResolvedConfig;
use crate::core::entry_list::{EditorConfig, EntryListEditor};
use crate::core::settings::SettingsTab;

/// External error shown while `goals_required` is set and no goal exists.
pub const GOALS_REQUIRED_MESSAGE: &str = "At least one goal is required";

/// Content of the modal error dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub title: String,
    pub message: String,
}

impl ErrorReport {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

pub struct App {
    pub active_tab: SettingsTab,
    pub goals: EntryListEditor,
    pub saved_goals: Vec<String>,
    pub goals_required: bool,
    pub status_message: String,
    pub error: Option<ErrorReport>,
    pub sandbox_endpoint: String,
    pub transactions: Vec<Transaction>,
    pub is_fetching: bool,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let goals = EntryListEditor::new(EditorConfig {
            label: config.goals_label.clone(),
            placeholder: config.goals_placeholder.clone(),
            max_words: config.max_words,
            external_error: None,
        });
        let mut app = Self {
            active_tab: SettingsTab::default(),
            goals,
            saved_goals: Vec::new(),
            goals_required: config.goals_required,
            status_message: String::from("Welcome to Pocketbook!"),
            error: None,
            sandbox_endpoint: config.sandbox.base_url.clone(),
            transactions: Vec::new(),
            is_fetching: false,
        };
        app.refresh_goals_error();
        app
    }

    /// Recompute the owner-level error and push it into the editor's props.
    pub fn refresh_goals_error(&mut self) {
        let external_error = (self.goals_required && self.saved_goals.is_empty())
            .then(|| GOALS_REQUIRED_MESSAGE.to_string());
        let config = EditorConfig {
            external_error,
            ..self.goals.config().clone()
        };
        self.goals.set_config(config);
    }
}
