use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorIntent {
    /// The whole edit buffer changed to `text`.
    Replace { text: String },
    /// A single keystroke appended to the buffer.
    Insert { ch: char },
    /// Bracketed paste appended to the buffer.
    Paste { text: String },
    Backspace,
    Clear,
}

impl Intent for EditorIntent {}
