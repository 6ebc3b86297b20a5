use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountIntent {
    Increment,
    Decrement,
}

impl Intent for CountIntent {}
