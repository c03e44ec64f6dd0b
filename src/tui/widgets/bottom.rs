use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span, Text},
};

use crate::tui::{app::App, theme::Theme};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let version_info = Text::from(vec![Line::raw(format!(
        "tui-select {}",
        env!("CARGO_PKG_VERSION")
    ))])
    .right_aligned();

    let help_text = if app.focused_is_open() {
        vec![
            Span::raw("↑/↓: Move"),
            Span::raw("  Enter/Space: Pick"),
            Span::raw("  Esc: Close"),
            Span::raw("  Tab: Next Field"),
        ]
    } else {
        vec![
            Span::raw("Enter/Space/↓: Open"),
            Span::raw("  Tab/Shift-Tab: Switch Field"),
            Span::raw("  Click ×: Clear"),
            Span::raw("  Q: Quit"),
        ]
    };

    let help = Text::from(Line::from(help_text))
        .left_aligned()
        .style(Theme::new().text_dim());

    frame.render_widget(help, area);
    frame.render_widget(version_info, area);
}
