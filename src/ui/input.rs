use crate::ui::app::{App, Focus};
use crate::ui::editor::EditorIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Counter => handle_counter_key(app, key),
        Focus::Editor => handle_editor_key(app, key),
    }
}

pub fn handle_paste(app: &mut App, text: String) {
    if app.focus() == Focus::Editor {
        app.edit(EditorIntent::Paste { text });
    }
}

fn handle_counter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            app.increment()
        }
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => app.decrement(),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.edit(EditorIntent::Clear);
        return;
    }
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.edit(EditorIntent::Backspace),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.edit(EditorIntent::Insert { ch })
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
