//! Banking sandbox client.
//!
//! One request, no retry: `POST {base_url}/transactions/get` with the
//! credentials and a date window, then decode the JSON body.

use std::fmt;

use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};
use log::{debug, info, warn};

use super::types::{ApiErrorBody, Transaction, TransactionsRequest, TransactionsResponse};
use crate::core::config::SandboxSettings;

/// Errors that can occur while talking to the sandbox.
#[derive(Debug)]
pub enum SandboxError {
    /// Missing credentials or unusable settings.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Sandbox answered with a non-success status.
    Api { status: u16, message: String },
    /// Body did not match the expected shape.
    Parse(String),
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::Config(msg) => write!(f, "config error: {msg}"),
            SandboxError::Network(msg) => write!(f, "network error: {msg}"),
            SandboxError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SandboxError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SandboxError {}

/// Anything that can produce a list of transactions.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Short name used in logs and the status bar.
    fn name(&self) -> &str;

    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, SandboxError>;
}

pub struct SandboxClient {
    http: reqwest::Client,
    settings: SandboxSettings,
}

impl SandboxClient {
    pub fn new(settings: SandboxSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    /// Build the request body for a window ending on `today`.
    pub fn build_request(&self, today: NaiveDate) -> Result<TransactionsRequest, SandboxError> {
        let require = |value: &Option<String>, what: &str| {
            value
                .clone()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| SandboxError::Config(format!("sandbox {what} is not set")))
        };

        let start_date = today
            .checked_sub_days(Days::new(u64::from(self.settings.days)))
            .ok_or_else(|| SandboxError::Config(format!("invalid day window: {}", self.settings.days)))?;

        Ok(TransactionsRequest {
            client_id: require(&self.settings.client_id, "client_id")?,
            secret: require(&self.settings.secret, "secret")?,
            access_token: require(&self.settings.access_token, "access_token")?,
            start_date,
            end_date: today,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/transactions/get", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TransactionSource for SandboxClient {
    fn name(&self) -> &str {
        "sandbox"
    }

    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, SandboxError> {
        let request = self.build_request(Local::now().date_naive())?;
        let url = self.endpoint();
        info!(
            "Fetching transactions from {} ({} to {})",
            url, request.start_date, request.end_date
        );

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SandboxError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SandboxError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.error_message.or(b.error_code))
                .unwrap_or(body);
            warn!("Sandbox returned HTTP {}: {}", status.as_u16(), message);
            return Err(SandboxError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: TransactionsResponse =
            serde_json::from_str(&body).map_err(|e| SandboxError::Parse(e.to_string()))?;
        debug!(
            "Received {} of {} transactions",
            parsed.transactions.len(),
            parsed.total_transactions
        );
        Ok(parsed.transactions)
    }
}
