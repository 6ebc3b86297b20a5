//! Counter and single text field on top of observable state slices.
//!
//! The feature state is split into three slices (count, live input,
//! submitted output), each held in its own [`ui::mvi::Store`]. A view
//! subscribes to the one slice it renders, so a change to one slice never
//! recomputes a view of another.

pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
