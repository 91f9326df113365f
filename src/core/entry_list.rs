//! # Entry List Editor
//!
//! The bounded multi-entry text editor. Owns three pieces of state:
//!
//! ```text
//! EntryListEditor
//! ├── entries: Vec<String>        // accepted, ordered, duplicates allowed
//! ├── buffer: String              // text being composed, untrimmed
//! ├── local_error: Option<String> // reason from the last rejected add
//! └── config: EditorConfig        // props pushed by the owner
//! ```
//!
//! Mutations go through three operations only: [`EntryListEditor::edit_buffer`],
//! [`EntryListEditor::add`] and [`EntryListEditor::remove`]. Successful adds
//! and every remove hand the owner a fresh copy of the list through the
//! change listener.
//!
//! ## Buffer / error states
//!
//! ```text
//!  Empty ──edit──► Composing ──add(ok)──► Empty
//!                      │
//!                  add(rejected)
//!                      ▼
//!                 Rejected(reason) ──edit──► Composing | Empty
//! ```

use log::{debug, warn};

use crate::core::validation::{DEFAULT_MAX_WORDS, ValidationResult, validate};

/// Props supplied by the owner. Read on every add; never re-applied to
/// entries that were already accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Caption shown above the input.
    pub label: String,
    /// Hint shown while the buffer is empty.
    pub placeholder: String,
    /// Per-entry word ceiling. `<= 0` rejects every non-empty input.
    pub max_words: i64,
    /// Owner-level error, shown verbatim next to the local one.
    pub external_error: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            placeholder: String::new(),
            max_words: DEFAULT_MAX_WORDS,
            external_error: None,
        }
    }
}

/// Observable combination of buffer contents and local error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    /// Buffer is blank, no error showing.
    Empty,
    /// Buffer holds text, no error showing.
    Composing,
    /// Last add was rejected; the buffer is kept as it was.
    Rejected(String),
}

/// Both error slots, kept apart so the view can show them side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorSurface<'a> {
    pub local: Option<&'a str>,
    pub external: Option<&'a str>,
}

impl<'a> ErrorSurface<'a> {
    /// Messages in display order: local first, then external.
    pub fn messages(&self) -> Vec<&'a str> {
        self.local.into_iter().chain(self.external).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.local.is_none() && self.external.is_none()
    }
}

/// Called with the full list after every successful add and every remove.
pub type ChangeListener = Box<dyn FnMut(Vec<String>)>;

pub struct EntryListEditor {
    entries: Vec<String>,
    buffer: String,
    local_error: Option<String>,
    config: EditorConfig,
    listener: Option<ChangeListener>,
}

impl EntryListEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            entries: Vec::new(),
            buffer: String::new(),
            local_error: None,
            config,
            listener: None,
        }
    }

    /// Register the owner's change listener, replacing any previous one.
    pub fn on_change(&mut self, listener: impl FnMut(Vec<String>) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn local_error(&self) -> Option<&str> {
        self.local_error.as_deref()
    }

    pub fn error_surface(&self) -> ErrorSurface<'_> {
        ErrorSurface {
            local: self.local_error.as_deref(),
            external: self.config.external_error.as_deref(),
        }
    }

    pub fn state(&self) -> EditorState {
        match &self.local_error {
            Some(reason) => EditorState::Rejected(reason.clone()),
            None if self.buffer.trim().is_empty() => EditorState::Empty,
            None => EditorState::Composing,
        }
    }

    /// Replace the props. Takes effect on the next add; accepted entries
    /// stay as they are and the local error is left alone.
    pub fn set_config(&mut self, config: EditorConfig) {
        self.config = config;
    }

    /// Controlled-mode sync: adopt the owner's list without notifying.
    pub fn set_entries(&mut self, entries: Vec<String>) {
        self.entries = entries;
    }

    /// Replace the buffer verbatim and drop any stale rejection.
    pub fn edit_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.local_error = None;
    }

    /// Validate the buffer and append it on success.
    ///
    /// Returns the validation outcome so callers can react without
    /// re-reading state. A rejection leaves entries and buffer untouched.
    pub fn add(&mut self) -> ValidationResult {
        let result = validate(&self.buffer, self.config.max_words);
        match &result {
            ValidationResult::Accepted(text) => {
                self.entries.push(text.clone());
                self.buffer.clear();
                self.local_error = None;
                debug!("Entry accepted ({} total)", self.entries.len());
                self.notify();
            }
            ValidationResult::Rejected(reason) => {
                debug!("Entry rejected: {reason}");
                self.local_error = Some(reason.clone());
            }
        }
        result
    }

    /// Remove the entry at `index`. Later entries shift down by one.
    ///
    /// Out-of-range indices are ignored and reported as `false`.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            warn!(
                "Ignoring remove at index {index}: only {} entries",
                self.entries.len()
            );
            return false;
        }
        self.entries.remove(index);
        self.notify();
        true
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(self.entries.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn editor_with_max(max_words: i64) -> EntryListEditor {
        EntryListEditor::new(EditorConfig {
            max_words,
            ..Default::default()
        })
    }

    /// Attach a listener that records every notification.
    fn record_changes(editor: &mut EntryListEditor) -> Rc<RefCell<Vec<Vec<String>>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        editor.on_change(move |entries| sink.borrow_mut().push(entries));
        log
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_editor_starts_empty() {
        let editor = EntryListEditor::new(EditorConfig::default());
        assert!(editor.entries().is_empty());
        assert_eq!(editor.buffer(), "");
        assert_eq!(editor.state(), EditorState::Empty);
        assert_eq!(editor.config().max_words, 50);
        assert!(editor.error_surface().is_empty());
    }

    #[test]
    fn test_accepted_add_trims_appends_and_clears() {
        let mut editor = editor_with_max(3);
        let changes = record_changes(&mut editor);

        editor.edit_buffer("  hello world  ");
        assert_eq!(editor.state(), EditorState::Composing);

        let result = editor.add();
        assert_eq!(result, ValidationResult::Accepted("hello world".to_string()));
        assert_eq!(editor.entries(), strings(&["hello world"]).as_slice());
        assert_eq!(editor.buffer(), "");
        assert_eq!(editor.local_error(), None);
        assert_eq!(editor.state(), EditorState::Empty);
        assert_eq!(*changes.borrow(), vec![strings(&["hello world"])]);
    }

    #[test]
    fn test_over_ceiling_keeps_buffer_and_sets_error() {
        let mut editor = editor_with_max(2);
        let changes = record_changes(&mut editor);

        editor.edit_buffer("one two three");
        editor.add();

        assert!(editor.entries().is_empty());
        assert_eq!(
            editor.local_error(),
            Some("Maximum 2 words allowed. Current: 3 words")
        );
        assert_eq!(editor.buffer(), "one two three");
        assert_eq!(
            editor.state(),
            EditorState::Rejected("Maximum 2 words allowed. Current: 3 words".to_string())
        );
        assert!(changes.borrow().is_empty(), "rejections never notify");
    }

    #[test]
    fn test_blank_add_is_rejected() {
        let mut editor = editor_with_max(5);
        let changes = record_changes(&mut editor);

        editor.add();
        assert_eq!(editor.local_error(), Some("Please enter some text"));

        editor.edit_buffer("   \t ");
        editor.add();
        assert_eq!(editor.local_error(), Some("Please enter some text"));
        assert_eq!(editor.buffer(), "   \t ");
        assert!(editor.entries().is_empty());
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_repeated_rejection_changes_nothing() {
        let mut editor = editor_with_max(1);
        editor.edit_buffer("keep");
        editor.add();
        editor.edit_buffer("too many words");

        editor.add();
        let entries_after_first = editor.entries().to_vec();
        let buffer_after_first = editor.buffer().to_string();
        editor.add();

        assert_eq!(editor.entries(), entries_after_first.as_slice());
        assert_eq!(editor.buffer(), buffer_after_first);
        assert_eq!(editor.entries(), strings(&["keep"]).as_slice());
    }

    #[test]
    fn test_edit_clears_rejection_regardless_of_content() {
        let mut editor = editor_with_max(1);
        editor.edit_buffer("two words");
        editor.add();
        assert!(editor.local_error().is_some());

        editor.edit_buffer("still two words");
        assert_eq!(editor.local_error(), None);
        assert_eq!(editor.state(), EditorState::Composing);

        editor.add();
        editor.edit_buffer("");
        assert_eq!(editor.local_error(), None);
        assert_eq!(editor.state(), EditorState::Empty);
    }

    #[test]
    fn test_edit_does_not_trim() {
        let mut editor = editor_with_max(5);
        editor.edit_buffer("  trailing space ");
        assert_eq!(editor.buffer(), "  trailing space ");
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let mut editor = editor_with_max(5);
        editor.set_entries(strings(&["a", "b", "c"]));
        let changes = record_changes(&mut editor);

        assert!(editor.remove(1));
        assert_eq!(editor.entries(), strings(&["a", "c"]).as_slice());
        assert_eq!(*changes.borrow(), vec![strings(&["a", "c"])]);
    }

    #[test]
    fn test_remove_preserves_prefix_and_shrinks_by_one() {
        let original = strings(&["rent", "food", "fuel", "gym", "books"]);
        for i in 0..original.len() {
            let mut editor = editor_with_max(5);
            editor.set_entries(original.clone());
            editor.remove(i);

            let remaining = editor.entries();
            assert_eq!(remaining.len(), original.len() - 1);
            assert_eq!(&remaining[..i], &original[..i]);
            assert_eq!(&remaining[i..], &original[i + 1..]);
        }
    }

    #[test]
    fn test_remove_leaves_buffer_and_error_alone() {
        let mut editor = editor_with_max(1);
        editor.set_entries(strings(&["x", "y"]));
        editor.edit_buffer("too long here");
        editor.add();

        editor.remove(0);
        assert_eq!(editor.buffer(), "too long here");
        assert_eq!(
            editor.local_error(),
            Some("Maximum 1 words allowed. Current: 3 words")
        );
    }

    #[test]
    fn test_out_of_range_remove_is_a_noop() {
        let mut editor = editor_with_max(5);
        editor.set_entries(strings(&["only"]));
        let changes = record_changes(&mut editor);

        assert!(!editor.remove(1));
        assert!(!editor.remove(usize::MAX));
        assert_eq!(editor.entries(), strings(&["only"]).as_slice());
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_duplicates_are_distinct_entries() {
        let mut editor = editor_with_max(5);
        editor.edit_buffer("save");
        editor.add();
        editor.edit_buffer("save");
        editor.add();
        assert_eq!(editor.entries(), strings(&["save", "save"]).as_slice());

        editor.remove(0);
        assert_eq!(editor.entries(), strings(&["save"]).as_slice());
    }

    #[test]
    fn test_notification_is_a_copy() {
        let mut editor = editor_with_max(5);
        let changes = record_changes(&mut editor);
        editor.edit_buffer("first");
        editor.add();

        changes.borrow_mut()[0].push("tampered".to_string());
        assert_eq!(editor.entries(), strings(&["first"]).as_slice());
    }

    #[test]
    fn test_lowering_ceiling_does_not_revalidate_existing_entries() {
        let mut editor = editor_with_max(5);
        editor.edit_buffer("four words right here");
        editor.add();

        editor.set_config(EditorConfig {
            max_words: 1,
            ..editor.config().clone()
        });
        assert_eq!(editor.entries(), strings(&["four words right here"]).as_slice());

        editor.edit_buffer("two words");
        editor.add();
        assert_eq!(editor.entries().len(), 1);
    }

    #[test]
    fn test_non_positive_ceiling_degrades_gracefully() {
        let mut editor = editor_with_max(0);
        editor.edit_buffer("anything");
        editor.add();
        assert!(editor.entries().is_empty());
        assert_eq!(
            editor.local_error(),
            Some("Maximum 0 words allowed. Current: 1 words")
        );
    }

    #[test]
    fn test_external_error_survives_successful_add() {
        let mut editor = EntryListEditor::new(EditorConfig {
            max_words: 5,
            external_error: Some("Required field".to_string()),
            ..Default::default()
        });
        editor.edit_buffer("emergency fund");
        editor.add();

        let surface = editor.error_surface();
        assert_eq!(surface.local, None);
        assert_eq!(surface.external, Some("Required field"));
        assert_eq!(surface.messages(), vec!["Required field"]);
    }

    #[test]
    fn test_both_errors_shown_local_first() {
        let mut editor = EntryListEditor::new(EditorConfig {
            max_words: 5,
            external_error: Some("Required field".to_string()),
            ..Default::default()
        });
        editor.add();

        assert_eq!(
            editor.error_surface().messages(),
            vec!["Please enter some text", "Required field"]
        );

        // Clearing the external slot leaves the local one in place
        editor.set_config(EditorConfig {
            external_error: None,
            ..editor.config().clone()
        });
        assert_eq!(editor.local_error(), Some("Please enter some text"));
    }

    #[test]
    fn test_set_entries_does_not_notify() {
        let mut editor = editor_with_max(5);
        let changes = record_changes(&mut editor);
        editor.set_entries(strings(&["from owner"]));
        assert!(changes.borrow().is_empty());
        assert_eq!(editor.entries(), strings(&["from owner"]).as_slice());
    }
}
