//! # Console Transaction Listing
//!
//! Backs `pocketbook transactions`: fetch once, print a table, exit.
//! Column widths are measured in display cells so merchant names with
//! wide characters still line up.

use log::info;
use unicode_width::UnicodeWidthStr;

use crate::api::{SandboxError, Transaction, TransactionSource};

/// Longest merchant name shown before truncation.
const MAX_NAME_WIDTH: usize = 40;

/// Fetch from `source` and render the result as a printable table.
pub async fn fetch_and_format(source: &dyn TransactionSource) -> Result<String, SandboxError> {
    let transactions = source.fetch_transactions().await?;
    info!(
        "Fetched {} transactions from {}",
        transactions.len(),
        source.name()
    );
    Ok(format_table(&transactions))
}

/// Render transactions as a fixed-width table with a total line.
pub fn format_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions in this period.\n".to_string();
    }

    let names: Vec<String> = transactions
        .iter()
        .map(|t| truncate_to_width(&t.name, MAX_NAME_WIDTH))
        .collect();
    let amounts: Vec<String> = transactions.iter().map(format_amount).collect();

    let name_width = names
        .iter()
        .map(|n| n.width())
        .max()
        .unwrap_or(0)
        .max("Description".len());
    let amount_width = amounts
        .iter()
        .map(|a| a.width())
        .max()
        .unwrap_or(0)
        .max("Amount".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<10}  {}  {:>amount_width$}\n",
        "Date",
        pad_to_width("Description", name_width),
        "Amount",
    ));
    out.push_str(&format!(
        "{}\n",
        "-".repeat(10 + 2 + name_width + 2 + amount_width)
    ));

    for ((t, name), amount) in transactions.iter().zip(&names).zip(&amounts) {
        let pending = if t.pending { "  (pending)" } else { "" };
        out.push_str(&format!(
            "{}  {}  {:>amount_width$}{}\n",
            t.date.format("%Y-%m-%d"),
            pad_to_width(name, name_width),
            amount,
            pending,
        ));
    }

    let total: f64 = transactions.iter().map(|t| t.amount).sum();
    out.push_str(&format!(
        "\n{} transactions, net outflow {:.2}\n",
        transactions.len(),
        total
    ));
    out
}

fn format_amount(t: &Transaction) -> String {
    match t.iso_currency_code.as_deref() {
        Some(code) => format!("{:.2} {}", t.amount, code),
        None => format!("{:.2}", t.amount),
    }
}

/// Right-pad with spaces to `width` display cells.
fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

/// Cut `s` to at most `max` display cells, ending in "..." when cut.
fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StaticSource, sample_transaction};

    #[test]
    fn test_empty_table() {
        assert_eq!(format_table(&[]), "No transactions in this period.\n");
    }

    #[test]
    fn test_table_rows_and_total() {
        let mut payroll = sample_transaction("t2", "Payroll", -1200.0);
        payroll.iso_currency_code = Some("USD".to_string());
        let mut pending = sample_transaction("t3", "Grocer", 30.25);
        pending.pending = true;

        let table = format_table(&[sample_transaction("t1", "Coffee", 4.5), payroll, pending]);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("Date"));
        assert!(lines[0].contains("Description"));
        assert!(lines[2].contains("Coffee"));
        assert!(lines[2].ends_with("4.50"));
        assert!(lines[3].contains("-1200.00 USD"));
        assert!(lines[4].ends_with("(pending)"));
        assert!(table.contains("3 transactions, net outflow -1165.25"));
    }

    #[test]
    fn test_columns_align_with_wide_names() {
        let table = format_table(&[
            sample_transaction("t1", "カフェ", 3.0),
            sample_transaction("t2", "Cafe", 3.0),
        ]);
        let rows: Vec<&str> = table.lines().skip(2).take(2).collect();
        assert_eq!(rows[0].width(), rows[1].width());
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghijkl", 8), "abcde...");
        assert!(truncate_to_width(&"長".repeat(30), 10).width() <= 10);
    }

    #[tokio::test]
    async fn test_fetch_and_format_uses_source() {
        let source = StaticSource::new(vec![sample_transaction("t1", "Rent", 900.0)]);
        let out = fetch_and_format(&source).await.unwrap();
        assert!(out.contains("Rent"));
        assert!(out.contains("1 transactions"));
    }
}
