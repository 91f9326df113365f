use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /transactions/get`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TransactionsRequest {
    pub client_id: String,
    pub secret: String,
    pub access_token: String,
    #[serde(with = "iso_date")]
    pub start_date: NaiveDate,
    #[serde(with = "iso_date")]
    pub end_date: NaiveDate,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total_transactions: usize,
}

/// A single posted or pending transaction.
///
/// Positive `amount` is money leaving the account, as the sandbox reports it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    pub transaction_id: String,
    pub account_id: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub iso_currency_code: Option<String>,
    #[serde(default)]
    pub pending: bool,
}

/// Error body returned with non-2xx responses.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// `YYYY-MM-DD` dates, the only shape the sandbox speaks.
mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
