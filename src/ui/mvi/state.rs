/// Marker trait for slice state.
///
/// `PartialEq` is what lets a store skip notifying subscribers when an
/// intent leaves the slice unchanged. `Sync` lets stores be shared by `Arc`.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
