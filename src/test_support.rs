//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::{SandboxError, Transaction, TransactionSource};
use crate::core::config::ResolvedConfig;
use crate::core::config::SandboxSettings;

/// A source that returns a fixed list without any network access.
pub struct StaticSource {
    transactions: Vec<Transaction>,
}

impl StaticSource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

#[async_trait]
impl TransactionSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, SandboxError> {
        Ok(self.transactions.clone())
    }
}

/// A transaction dated 2024-03-01 with the given id, name and amount.
pub fn sample_transaction(id: &str, name: &str, amount: f64) -> Transaction {
    Transaction {
        transaction_id: id.to_string(),
        account_id: "acc-1".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
        name: name.to_string(),
        amount,
        iso_currency_code: None,
        pending: false,
    }
}

/// Resolved config with fixed values, independent of env and disk.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        goals_label: "Goals".to_string(),
        goals_placeholder: "Add a goal".to_string(),
        max_words: 5,
        goals_required: false,
        sandbox: SandboxSettings::default(),
    }
}

/// Creates a test App from [`test_config`].
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::from_config(&test_config())
}
