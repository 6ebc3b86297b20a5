use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms one slice's state based on intents.
///
/// The reducer is the only place where a slice changes. It must stay a pure
/// function: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Slice name, used in logs and lookup errors.
    const SLICE: &'static str;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
