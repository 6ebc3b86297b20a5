use crate::ui::count::intent::CountIntent;
use crate::ui::count::state::CountState;
use crate::ui::mvi::Reducer;

pub struct CountReducer;

impl Reducer for CountReducer {
    type State = CountState;
    type Intent = CountIntent;
    const SLICE: &'static str = "count";

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Saturate at the i64 extremes instead of panicking on overflow.
        let count = match intent {
            CountIntent::Increment => state.count.saturating_add(1),
            CountIntent::Decrement => state.count.saturating_sub(1),
        };
        CountState { count }
    }
}
