use crate::ui::app::{App, Focus};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, FOCUS_BORDER, GLOBAL_BORDER, PRIMARY_TEXT};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const KEY_HINTS: &str =
    " Tab: Focus │ +/-: Count │ Enter: Submit │ Ctrl+U: Clear │ Ctrl+Q: Quit";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let focus = app.focus();
    let views = app.views();

    frame.render_widget(Header::new().widget(focus), regions.header);

    frame.render_widget(
        panel(" Counter ", views.counter.lines(), focus == Focus::Counter),
        regions.counter,
    );

    draw_editor(frame, app, regions.editor);

    frame.render_widget(
        panel(" Output ", views.output.lines(), false).wrap(Wrap { trim: false }),
        regions.output,
    );

    draw_footer(frame, regions.footer);
}

fn panel(title: &'static str, lines: Vec<Line<'static>>, focused: bool) -> Paragraph<'static> {
    Paragraph::new(lines).block(bordered(focused).title(Span::styled(
        title,
        Style::default().fg(ACCENT),
    )))
}

fn bordered(focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Single-line editor that keeps the end of the buffer and the cursor in view.
fn draw_editor(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Editor;
    let lines = app.views().editor.lines();
    // The placeholder occupies the line while the buffer is empty.
    let typed = if app.input_editor().is_empty() {
        0
    } else {
        lines.first().map(Line::width).unwrap_or(0)
    };
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = editor_scroll(typed, inner_width);

    frame.render_widget(
        panel(" Input ", lines, focused).scroll((0, scroll.min(u16::MAX as usize) as u16)),
        area,
    );

    if focused && inner_width > 0 && area.height >= 3 {
        let x = area.x + 1 + (typed - scroll).min(inner_width - 1) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}

/// Columns to scroll so the cell after the last typed one stays visible.
pub(crate) fn editor_scroll(typed: usize, inner_width: usize) -> usize {
    if inner_width == 0 {
        return 0;
    }
    (typed + 1).saturating_sub(inner_width)
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let block = bordered(false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let version = format!("v{VERSION} ");
    let [hints_area, version_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(version.chars().count() as u16),
        ])
        .areas(inner);

    let style = Style::default().fg(PRIMARY_TEXT).add_modifier(Modifier::DIM);
    frame.render_widget(Paragraph::new(KEY_HINTS).style(style), hints_area);
    frame.render_widget(
        Paragraph::new(version)
            .style(style)
            .alignment(Alignment::Right),
        version_area,
    );
}
