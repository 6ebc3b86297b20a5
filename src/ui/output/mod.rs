mod intent;
mod reducer;
mod state;

pub use intent::OutputIntent;
pub use reducer::OutputReducer;
pub use state::SubmittedOutputState;
