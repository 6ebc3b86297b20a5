use crate::ui::mvi::UiState;

/// Counter slice. Starts at zero and has no lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountState {
    pub count: i64,
}

impl UiState for CountState {}
