use super::app::App;
use super::widgets::{bottom, header, select};
use crate::tui::components::select::SelectError;
use ratatui::prelude::*;

pub fn ui(frame: &mut Frame<'_>, app: &mut App) -> Result<(), SelectError> {
    let layout = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .split(frame.area());

    header::render(frame, layout[0], app);
    bottom::render(frame, layout[2], app);

    let body = layout[1].inner(Margin::new(1, 1));
    let rows = Layout::vertical(
        app.fields
            .iter()
            .map(|_| Constraint::Length(select::CONTAINER_HEIGHT + 1)),
    )
    .split(body);

    let mut layouts = Vec::with_capacity(app.fields.len());
    for (index, row) in rows.iter().enumerate() {
        let area = Rect {
            height: row.height.min(select::CONTAINER_HEIGHT),
            ..*row
        };
        let props = app.props(index)?;
        let title = format!(" {} ", app.fields[index].config.name);
        layouts.push(select::render_container(
            frame,
            area,
            &props,
            &app.states[index],
            &title,
        ));
    }

    // Lists go last so an open one covers the fields below it.
    for (index, layout) in layouts.iter_mut().enumerate() {
        let props = app.props(index)?;
        select::render_list(frame, &props, &app.states[index], layout);
    }

    for (state, layout) in app.states.iter_mut().zip(layouts) {
        state.set_layout(layout);
    }
    Ok(())
}
