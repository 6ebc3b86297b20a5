//! Composition root for the counter screen.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::ui::count::{CountIntent, CountState};
use crate::ui::editor::{EditorIntent, InputEditorState};
use crate::ui::environment::{Environment, EnvironmentError};
use crate::ui::output::{OutputIntent, SubmittedOutputState};
use crate::ui::view_model::CounterViewModel;
use crate::ui::views::Views;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    Counter,
    Editor,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Counter => Focus::Editor,
            Focus::Editor => Focus::Counter,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Counter => "counter",
            Focus::Editor => "editor",
        }
    }
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Built once; owns the slices for the whole session.
    view_model: CounterViewModel,
    environment: Environment,
    views: Views,
    /// Raised by any view invalidation, cleared when a frame is drawn.
    redraw: Arc<AtomicBool>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, EnvironmentError> {
        let view_model = CounterViewModel::new();
        let mut environment = Environment::new();
        view_model.provide_into(&mut environment);

        let redraw = Arc::new(AtomicBool::new(true));
        let views = Views::from_environment(
            &environment,
            &redraw,
            config.editor.placeholder.clone(),
        )?;

        tracing::info!(
            slices = environment.len(),
            focus = config.ui.start_focus.label(),
            "counter screen composed"
        );

        Ok(Self {
            should_quit: false,
            focus: config.ui.start_focus,
            view_model,
            environment,
            views,
            redraw,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
        self.request_redraw();
    }

    pub fn increment(&mut self) {
        self.view_model.count().dispatch(CountIntent::Increment);
    }

    pub fn decrement(&mut self) {
        self.view_model.count().dispatch(CountIntent::Decrement);
    }

    pub fn edit(&mut self, intent: EditorIntent) {
        self.view_model.input_editor().dispatch(intent);
    }

    /// Commit the current edit buffer. The buffer itself is left as is.
    pub fn submit(&mut self) {
        let text = self.view_model.input_editor().with(|state| state.user_input.clone());
        tracing::debug!(len = text.chars().count(), "submitting edit buffer");
        self.view_model
            .submitted_output()
            .dispatch(OutputIntent::Submit { text });
    }

    pub fn count(&self) -> CountState {
        self.view_model.count().get()
    }

    pub fn input_editor(&self) -> InputEditorState {
        self.view_model.input_editor().get()
    }

    pub fn submitted_output(&self) -> SubmittedOutputState {
        self.view_model.submitted_output().get()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn request_redraw(&self) {
        self.redraw.store(true, Ordering::Release);
    }

    /// Whether a frame is due; clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.redraw.swap(false, Ordering::AcqRel)
    }
}
