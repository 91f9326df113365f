//! # Actions
//!
//! Everything that can happen in Pocketbook becomes an `Action`.
//! User presses Tab? That's `Action::NextTab`.
//! Sandbox responds? That's `Action::TransactionsLoaded(list)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the caller must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::Transaction;
use crate::core::state::{App, ErrorReport};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    NextTab,
    PrevTab,
    /// The goals editor reported a new list (successful add or remove).
    GoalsChanged(Vec<String>),
    FetchTransactions,
    TransactionsLoaded(Vec<Transaction>),
    FetchFailed(String),
    ReportError(ErrorReport),
    DismissError,
    Quit,
}

/// Work the event loop must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    SpawnFetch,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::NextTab => {
            app.active_tab = app.active_tab.next();
            Effect::None
        }
        Action::PrevTab => {
            app.active_tab = app.active_tab.prev();
            Effect::None
        }
        Action::GoalsChanged(entries) => {
            app.status_message = match entries.len() {
                1 => "1 goal".to_string(),
                n => format!("{n} goals"),
            };
            app.saved_goals = entries;
            app.refresh_goals_error();
            Effect::None
        }
        Action::FetchTransactions => {
            if app.is_fetching {
                debug!("Fetch already in flight, ignoring");
                return Effect::None;
            }
            app.is_fetching = true;
            app.status_message = "Fetching transactions...".to_string();
            Effect::SpawnFetch
        }
        Action::TransactionsLoaded(transactions) => {
            info!("Loaded {} transactions", transactions.len());
            app.is_fetching = false;
            app.status_message = format!("{} transactions", transactions.len());
            app.transactions = transactions;
            Effect::None
        }
        Action::FetchFailed(message) => {
            warn!("Transaction fetch failed: {}", message);
            app.is_fetching = false;
            app.status_message = "Fetch failed".to_string();
            app.error = Some(ErrorReport::new("Transaction fetch failed", message));
            Effect::None
        }
        Action::ReportError(report) => {
            app.error = Some(report);
            Effect::None
        }
        Action::DismissError => {
            app.error = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResolvedConfig;
    use crate::core::settings::SettingsTab;
    use crate::core::state::GOALS_REQUIRED_MESSAGE;
    use crate::test_support::{sample_transaction, test_app, test_config};

    #[test]
    fn test_tab_cycling() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::NextTab), Effect::None);
        assert_eq!(app.active_tab, SettingsTab::Sandbox);
        update(&mut app, Action::PrevTab);
        update(&mut app, Action::PrevTab);
        assert_eq!(app.active_tab, SettingsTab::About);
    }

    #[test]
    fn test_goals_changed_mirrors_list_and_refreshes_external_error() {
        let mut app = App::from_config(&ResolvedConfig {
            goals_required: true,
            ..test_config()
        });
        assert_eq!(app.goals.error_surface().external, Some(GOALS_REQUIRED_MESSAGE));

        update(&mut app, Action::GoalsChanged(vec!["travel fund".to_string()]));
        assert_eq!(app.saved_goals, vec!["travel fund".to_string()]);
        assert_eq!(app.goals.error_surface().external, None);
        assert_eq!(app.status_message, "1 goal");

        update(&mut app, Action::GoalsChanged(Vec::new()));
        assert_eq!(app.goals.error_surface().external, Some(GOALS_REQUIRED_MESSAGE));
        assert_eq!(app.status_message, "0 goals");
    }

    #[test]
    fn test_goals_changed_keeps_local_error() {
        let mut app = test_app();
        app.goals.add();
        update(&mut app, Action::GoalsChanged(Vec::new()));
        assert_eq!(app.goals.local_error(), Some("Please enter some text"));
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::FetchTransactions), Effect::SpawnFetch);
        assert!(app.is_fetching);
        // Second request while in flight is dropped
        assert_eq!(update(&mut app, Action::FetchTransactions), Effect::None);

        update(
            &mut app,
            Action::TransactionsLoaded(vec![sample_transaction("t1", "Rent", 900.0)]),
        );
        assert!(!app.is_fetching);
        assert_eq!(app.transactions.len(), 1);
        assert_eq!(app.status_message, "1 transactions");
    }

    #[test]
    fn test_fetch_failure_opens_error_dialog() {
        let mut app = test_app();
        update(&mut app, Action::FetchTransactions);
        update(&mut app, Action::FetchFailed("network error: refused".to_string()));

        assert!(!app.is_fetching);
        let report = app.error.clone().unwrap();
        assert_eq!(report.title, "Transaction fetch failed");
        assert_eq!(report.message, "network error: refused");

        update(&mut app, Action::DismissError);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_report_error_and_quit() {
        let mut app = test_app();
        update(&mut app, Action::ReportError(ErrorReport::new("Config", "bad toml")));
        assert_eq!(app.error.as_ref().map(|e| e.title.as_str()), Some("Config"));
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
