use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmittedOutputState {
    /// Text of the most recent submit. Empty until the first one.
    pub submitted_text: String,
    /// Number of submits so far, including ones that repeat the same text.
    pub submissions: u64,
}

impl UiState for SubmittedOutputState {}

impl SubmittedOutputState {
    pub fn has_submission(&self) -> bool {
        self.submissions > 0
    }
}
