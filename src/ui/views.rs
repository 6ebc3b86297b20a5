//! Slice-scoped views.
//!
//! Each view subscribes to exactly one slice and caches what it presents.
//! A change to another slice never reaches it, so it never recomputes for
//! one.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::count::{CountReducer, CountState};
use crate::ui::editor::{EditorReducer, InputEditorState};
use crate::ui::environment::{Environment, EnvironmentError};
use crate::ui::mvi::{Reducer, Store, Subscription};
use crate::ui::output::{OutputReducer, SubmittedOutputState};
use crate::ui::theme::{ACCENT, HINT_TEXT, PLACEHOLDER_TEXT, PRIMARY_TEXT};

type Presenter<S> = Box<dyn Fn(&S) -> Vec<Line<'static>> + Send + Sync>;

pub struct SliceView<R: Reducer> {
    store: Arc<Store<R>>,
    cache: Arc<Mutex<Option<Vec<Line<'static>>>>>,
    recomputes: AtomicUsize,
    present: Presenter<R::State>,
    _subscription: Subscription,
}

impl<R: Reducer + 'static> SliceView<R> {
    /// Look up `R`'s slice in the environment and subscribe to it.
    ///
    /// `redraw` is raised whenever this view is invalidated.
    pub fn from_environment<F>(
        environment: &Environment,
        redraw: Arc<AtomicBool>,
        present: F,
    ) -> Result<Self, EnvironmentError>
    where
        F: Fn(&R::State) -> Vec<Line<'static>> + Send + Sync + 'static,
    {
        let store = environment.require::<R>()?;
        Ok(Self::new(store, redraw, present))
    }

    pub fn new<F>(store: Arc<Store<R>>, redraw: Arc<AtomicBool>, present: F) -> Self
    where
        F: Fn(&R::State) -> Vec<Line<'static>> + Send + Sync + 'static,
    {
        let cache = Arc::new(Mutex::new(None));
        let invalidate = Arc::clone(&cache);
        let subscription = store.subscribe(move |_| {
            *invalidate.lock() = None;
            redraw.store(true, Ordering::Release);
        });
        Self {
            store,
            cache,
            recomputes: AtomicUsize::new(0),
            present: Box::new(present),
            _subscription: subscription,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut cache = self.cache.lock();
        if let Some(lines) = cache.as_ref() {
            return lines.clone();
        }
        let lines = self.store.with(|state| (self.present)(state));
        self.recomputes.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(slice = R::SLICE, "view recomputed");
        *cache = Some(lines.clone());
        lines
    }

    pub fn is_stale(&self) -> bool {
        self.cache.lock().is_none()
    }

    pub fn recompute_count(&self) -> usize {
        self.recomputes.load(Ordering::Relaxed)
    }
}

/// The three panels of the counter screen.
pub struct Views {
    pub counter: SliceView<CountReducer>,
    pub editor: SliceView<EditorReducer>,
    pub output: SliceView<OutputReducer>,
}

impl Views {
    pub fn from_environment(
        environment: &Environment,
        redraw: &Arc<AtomicBool>,
        placeholder: String,
    ) -> Result<Self, EnvironmentError> {
        Ok(Self {
            counter: SliceView::<CountReducer>::from_environment(
                environment,
                Arc::clone(redraw),
                present_count,
            )?,
            editor: SliceView::<EditorReducer>::from_environment(
                environment,
                Arc::clone(redraw),
                move |state: &InputEditorState| present_editor(state, &placeholder),
            )?,
            output: SliceView::<OutputReducer>::from_environment(
                environment,
                Arc::clone(redraw),
                present_output,
            )?,
        })
    }
}

pub fn present_count(state: &CountState) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("Count: ", Style::default().fg(PRIMARY_TEXT)),
            Span::styled(
                state.count.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "[-] decrement   [+] increment",
            Style::default().fg(HINT_TEXT),
        )),
    ]
}

pub fn present_editor(state: &InputEditorState, placeholder: &str) -> Vec<Line<'static>> {
    if state.is_empty() {
        return vec![Line::from(Span::styled(
            placeholder.to_string(),
            Style::default()
                .fg(PLACEHOLDER_TEXT)
                .add_modifier(Modifier::ITALIC),
        ))];
    }
    vec![Line::from(Span::styled(
        state.user_input.clone(),
        Style::default().fg(PRIMARY_TEXT),
    ))]
}

pub fn present_output(state: &SubmittedOutputState) -> Vec<Line<'static>> {
    if !state.has_submission() {
        return vec![Line::from(Span::styled(
            "Nothing submitted yet",
            Style::default().fg(PLACEHOLDER_TEXT),
        ))];
    }
    vec![Line::from(vec![
        Span::styled("Submitted: ", Style::default().fg(PRIMARY_TEXT)),
        Span::styled(
            state.submitted_text.clone(),
            Style::default().fg(ACCENT),
        ),
    ])]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn editor_shows_placeholder_only_when_empty() {
        let empty = InputEditorState::default();
        assert_eq!(text(&present_editor(&empty, "type here")), "type here");

        let filled = InputEditorState {
            user_input: "abc".to_string(),
        };
        assert_eq!(text(&present_editor(&filled, "type here")), "abc");
    }

    #[test]
    fn output_distinguishes_empty_submit_from_none() {
        let none = SubmittedOutputState::default();
        assert_eq!(text(&present_output(&none)), "Nothing submitted yet");

        let empty = SubmittedOutputState {
            submitted_text: String::new(),
            submissions: 1,
        };
        assert_eq!(text(&present_output(&empty)), "Submitted: ");
    }

    #[test]
    fn cached_lines_survive_until_invalidated() {
        let store = Arc::new(Store::<CountReducer>::new());
        let redraw = Arc::new(AtomicBool::new(false));
        let view =
            SliceView::<CountReducer>::new(Arc::clone(&store), Arc::clone(&redraw), present_count);

        view.lines();
        view.lines();
        assert_eq!(view.recompute_count(), 1);

        store.dispatch(crate::ui::count::CountIntent::Increment);
        assert!(view.is_stale());
        assert!(redraw.load(Ordering::Acquire));
        assert!(text(&view.lines()).starts_with("Count: 1"));
        assert_eq!(view.recompute_count(), 2);
    }
}
