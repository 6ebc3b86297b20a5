use crate::ui::mvi::UiState;

/// Live, uncommitted text. Never validated or transformed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputEditorState {
    pub user_input: String,
}

impl UiState for InputEditorState {}

impl InputEditorState {
    pub fn is_empty(&self) -> bool {
        self.user_input.is_empty()
    }
}
