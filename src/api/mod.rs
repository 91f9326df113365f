//! Banking sandbox API: wire types and the HTTP client.

pub mod client;
pub mod types;

pub use client::{SandboxClient, SandboxError, TransactionSource};
pub use types::Transaction;
