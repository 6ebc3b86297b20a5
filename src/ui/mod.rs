pub mod app;
pub mod count;
pub mod editor;
pub mod environment;
pub mod events;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod output;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod view_model;
pub mod views;

pub use runtime::run;
