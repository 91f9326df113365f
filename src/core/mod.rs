//! # Core Application Logic
//!
//! This module contains Pocketbook's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Validation (pure)    │
//!                    │  • EntryListEditor      │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  Console   │
//!             │  Adapter   │          │  listing   │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`]: word-ceiling validator
//! - [`entry_list`]: the bounded multi-entry editor
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`settings`]: tabs of the settings shell
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod entry_list;
pub mod settings;
pub mod state;
pub mod validation;
