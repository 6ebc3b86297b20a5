mod intent;
mod reducer;
mod state;

pub use intent::CountIntent;
pub use reducer::CountReducer;
pub use state::CountState;
