//! Model-View-Intent (MVI) primitives shared by every state slice.
//!
//! ```text
//! Intent ──→ Reducer ──→ Store ──→ subscribers (views)
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: one slice of feature state, compared to detect changes
//! - **Intent**: a discrete user action or input event for that slice
//! - **Reducer**: pure function producing the next state
//! - **Store**: holds a slice and notifies its own subscribers only

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, Subscription};
