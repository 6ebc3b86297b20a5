use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

pub fn run(config: &Config) -> anyhow::Result<()> {
    // Compose before touching the terminal so wiring errors print normally.
    let mut app = App::new(config)?;
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, "entering event loop");

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, text),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
                terminal.autoresize()?;
                app.request_redraw();
            }
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                drop(guard);
                return Err(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "terminal event source closed",
                )
                .into());
            }
        }
    }

    drop(guard);
    tracing::info!(count = app.count().count, "counter screen closed");
    Ok(())
}
