use std::sync::Arc;

use crate::ui::count::CountReducer;
use crate::ui::editor::EditorReducer;
use crate::ui::environment::Environment;
use crate::ui::mvi::Store;
use crate::ui::output::OutputReducer;

/// Feature-level owner of the counter screen's three state slices.
///
/// Built once per session by the composition root. It has no behavior of its
/// own; views reach the slices through the [`Environment`] it provides into.
pub struct CounterViewModel {
    count: Arc<Store<CountReducer>>,
    input_editor: Arc<Store<EditorReducer>>,
    submitted_output: Arc<Store<OutputReducer>>,
}

impl Default for CounterViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterViewModel {
    pub fn new() -> Self {
        tracing::debug!("constructing counter view model");
        Self {
            count: Arc::new(Store::new()),
            input_editor: Arc::new(Store::new()),
            submitted_output: Arc::new(Store::new()),
        }
    }

    pub fn count(&self) -> &Arc<Store<CountReducer>> {
        &self.count
    }

    pub fn input_editor(&self) -> &Arc<Store<EditorReducer>> {
        &self.input_editor
    }

    pub fn submitted_output(&self) -> &Arc<Store<OutputReducer>> {
        &self.submitted_output
    }

    /// Make each slice independently discoverable by descendant views.
    pub fn provide_into(&self, environment: &mut Environment) {
        environment
            .provide(Arc::clone(&self.count))
            .provide(Arc::clone(&self.input_editor))
            .provide(Arc::clone(&self.submitted_output));
    }
}
