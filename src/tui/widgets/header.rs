use crate::tui::{app::App, theme::Theme};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Status line on the left, focused field summary on the right.
pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let theme = Theme::new();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.block_active());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = match &app.status_message {
        Some(msg) => Line::styled(msg.clone(), theme.text_highlight()),
        None => Line::styled("Tab to move between fields", theme.text_dim()),
    };
    let summary = focus_summary(app).unwrap_or_default();
    let [status_area, summary_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(summary.width() as u16)])
            .areas(inner);

    frame.render_widget(Paragraph::new(status), status_area);
    frame.render_widget(Paragraph::new(summary), summary_area);
}

fn focus_summary(app: &App) -> Option<Line<'static>> {
    let theme = Theme::new();
    let index = app.focus?;
    let field = &app.fields[index].config;
    let mode = if field.multiple { "multiple" } else { "single" };
    let count = app.values[index].selected().len();

    Some(Line::from(vec![
        Span::styled(field.name.clone(), theme.text_highlight()),
        Span::styled(format!(" ({mode}) "), theme.text_dim()),
        Span::styled(
            format!("{count}/{} selected", field.options.len()),
            theme.text_normal(),
        ),
    ]))
}
