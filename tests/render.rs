mod common;

use common::{app, buffer_rows, buffer_text};
use counterview::config::Config;
use counterview::ui::app::App;
use counterview::ui::editor::EditorIntent;
use counterview::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn initial_screen_shows_all_panels() {
    let app = app();
    let screen = render(&app);
    assert!(screen.contains("counterview"));
    assert!(screen.contains("Count: 0"));
    assert!(screen.contains("Type something, Enter to submit"));
    assert!(screen.contains("Nothing submitted yet"));
    assert!(screen.contains("Ctrl+Q: Quit"));
    assert!(screen.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn screen_reflects_slice_changes() {
    let mut app = app();
    app.decrement();
    app.edit(EditorIntent::Replace {
        text: "draft".to_string(),
    });
    let screen = render(&app);
    assert!(screen.contains("Count: -1"));
    assert!(screen.contains("draft"));
    assert!(screen.contains("Nothing submitted yet"));

    app.submit();
    let screen = render(&app);
    assert!(screen.contains("Submitted: draft"));
}

#[test]
fn custom_placeholder_is_rendered() {
    let mut config = Config::default();
    config.editor.placeholder = "say something".to_string();
    let app = App::new(&config).unwrap();
    assert!(render(&app).contains("say something"));
}

#[test]
fn header_shows_focus() {
    let mut app = app();
    assert!(render(&app).contains("focus: counter"));
    app.toggle_focus();
    assert!(render(&app).contains("focus: editor"));
}

#[test]
fn rendering_twice_reuses_cached_views() {
    let app = app();
    render(&app);
    render(&app);
    assert_eq!(app.views().counter.recompute_count(), 1);
    assert_eq!(app.views().editor.recompute_count(), 1);
    assert_eq!(app.views().output.recompute_count(), 1);
}

#[test]
fn small_terminal_does_not_panic() {
    let app = app();
    let mut terminal = Terminal::new(TestBackend::new(12, 4)).unwrap();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
    assert_eq!(buffer_rows(terminal.backend().buffer()).len(), 4);
}

#[test]
fn long_input_scrolls_to_show_its_tail() {
    let mut app = app();
    app.toggle_focus();
    let text = format!("{}END", "x".repeat(100));
    app.edit(EditorIntent::Replace { text });

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
    let rows = buffer_rows(terminal.backend().buffer());
    let editor_row = rows
        .iter()
        .find(|row| row.contains("xxxx"))
        .expect("editor row rendered");
    assert!(editor_row.contains("END"));

    // Cursor sits on the column after the tail, inside the right border.
    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!(cursor.x, 78);
}
