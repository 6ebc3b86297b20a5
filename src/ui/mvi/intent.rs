//! Intents: the inbound events a slice understands.

/// Marker trait for intent objects.
///
/// An intent is either a discrete action (a button press, a submit) or a
/// continuous input event (a keystroke). Reducers consume them.
pub trait Intent: Send + 'static {}
