//! Composition-scoped registry of state slices.
//!
//! The composition root provides each slice once; views look up the slice
//! they render by its reducer type instead of having it threaded through
//! every layer.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::ui::mvi::{Reducer, Store};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("State slice '{slice}' was not provided to the environment")]
    MissingSlice { slice: &'static str },
}

#[derive(Clone, Default)]
pub struct Environment {
    slices: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `store` as the slice for `R`, replacing any earlier one.
    pub fn provide<R: Reducer + 'static>(&mut self, store: Arc<Store<R>>) -> &mut Self {
        if self.slices.insert(TypeId::of::<R>(), store).is_some() {
            tracing::warn!(slice = R::SLICE, "slice provided twice, replacing");
        }
        self
    }

    pub fn store<R: Reducer + 'static>(&self) -> Option<Arc<Store<R>>> {
        let slice = Arc::clone(self.slices.get(&TypeId::of::<R>())?);
        slice.downcast::<Store<R>>().ok()
    }

    pub fn require<R: Reducer + 'static>(&self) -> Result<Arc<Store<R>>, EnvironmentError> {
        self.store::<R>()
            .ok_or(EnvironmentError::MissingSlice { slice: R::SLICE })
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
