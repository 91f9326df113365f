//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: Top status bar with the active tab and status message
//! - `SettingsTabs`: Tab strip of the settings shell
//! - `ErrorDialog`: Modal error report (also captures dismiss keys)
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `StringArrayInput`: Bounded multi-entry editor view. Persistent
//!   presentation state lives in `StringArrayInputState`; the component is
//!   rebuilt each frame around the borrowed `EntryListEditor`.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into
//! global state:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(tab.title().to_string(), app.status_message.clone(), false)
//!     .render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs                (this file)
//! ├── title_bar.rs          (Top status bar)
//! ├── settings_tabs.rs      (Tab strip)
//! ├── error_dialog.rs       (Modal error report)
//! └── string_array_input/   (Bounded entry editor view)
//! ```

pub mod error_dialog;
pub mod settings_tabs;
pub mod string_array_input;
mod title_bar;

pub use error_dialog::{DialogEvent, ErrorDialog};
pub use settings_tabs::SettingsTabs;
pub use string_array_input::{ListEvent, StringArrayInput, StringArrayInputState};
pub use title_bar::TitleBar;
