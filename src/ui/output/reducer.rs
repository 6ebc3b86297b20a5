use crate::ui::mvi::Reducer;
use crate::ui::output::intent::OutputIntent;
use crate::ui::output::state::SubmittedOutputState;

pub struct OutputReducer;

impl Reducer for OutputReducer {
    type State = SubmittedOutputState;
    type Intent = OutputIntent;
    const SLICE: &'static str = "submitted_output";

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OutputIntent::Submit { text } => SubmittedOutputState {
                submitted_text: text,
                submissions: state.submissions.saturating_add(1),
            },
        }
    }
}
