use crate::ui::editor::intent::EditorIntent;
use crate::ui::editor::state::InputEditorState;
use crate::ui::mvi::Reducer;

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = InputEditorState;
    type Intent = EditorIntent;
    const SLICE: &'static str = "input_editor";

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut user_input = state.user_input;
        match intent {
            EditorIntent::Replace { text } => user_input = text,
            EditorIntent::Insert { ch } => user_input.push(ch),
            EditorIntent::Paste { text } => user_input.push_str(&text),
            EditorIntent::Backspace => {
                user_input.pop();
            }
            EditorIntent::Clear => user_input.clear(),
        }
        InputEditorState { user_input }
    }
}
