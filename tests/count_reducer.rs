use counterview::ui::count::{CountIntent, CountReducer, CountState};
use counterview::ui::mvi::Reducer;

fn apply(state: CountState, intents: &[CountIntent]) -> CountState {
    intents
        .iter()
        .fold(state, |state, intent| CountReducer::reduce(state, *intent))
}

#[test]
fn starts_at_zero() {
    assert_eq!(CountState::default().count, 0);
}

#[test]
fn increment_n_times_then_decrement_n_times_returns_to_zero() {
    for n in [0usize, 1, 2, 17, 250] {
        let up = apply(CountState::default(), &vec![CountIntent::Increment; n]);
        assert_eq!(up.count, n as i64);

        let down = apply(up, &vec![CountIntent::Decrement; n]);
        assert_eq!(down.count, 0);
    }
}

#[test]
fn decrement_from_zero_goes_negative() {
    let state = CountReducer::reduce(CountState::default(), CountIntent::Decrement);
    assert_eq!(state.count, -1);
}

#[test]
fn increment_increment_decrement_is_one() {
    let state = apply(
        CountState::default(),
        &[
            CountIntent::Increment,
            CountIntent::Increment,
            CountIntent::Decrement,
        ],
    );
    assert_eq!(state.count, 1);
}

#[test]
fn extremes_saturate_instead_of_overflowing() {
    let max = CountReducer::reduce(CountState { count: i64::MAX }, CountIntent::Increment);
    assert_eq!(max.count, i64::MAX);

    let min = CountReducer::reduce(CountState { count: i64::MIN }, CountIntent::Decrement);
    assert_eq!(min.count, i64::MIN);
}
