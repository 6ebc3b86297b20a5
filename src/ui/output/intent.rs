use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputIntent {
    /// Commit `text` as the displayed value. Empty text is allowed.
    Submit { text: String },
}

impl Intent for OutputIntent {}
