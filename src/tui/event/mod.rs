use super::app::App;
use crate::tui::event::select::{SelectEvent, SelectKey};
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub mod select;

pub fn handle_event(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    route_event(app, event::read()?)
}

/// Send one terminal event to the app. Focus events only arrive once the
/// terminal has been asked for them (`EnableFocusChange` in `App::run`).
pub fn route_event(app: &mut App, event: Event) -> Result<(), Box<dyn std::error::Error>> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return Ok(());
            }
            handle_key(app, key)?;
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse)?,
        Event::FocusLost => app.blur()?,
        _ => {}
    }
    Ok(())
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), Box<dyn std::error::Error>> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.shutdown = true;
        return Ok(());
    }

    match key.code {
        KeyCode::Tab => app.focus_next()?,
        KeyCode::BackTab => app.focus_previous()?,
        KeyCode::Char('q') if !app.focused_is_open() => app.shutdown = true,
        _ => {
            let Some(index) = app.focus else {
                return Ok(());
            };
            if !app.listeners.is_listening(index) {
                return Ok(());
            }
            if let Some(key) = SelectKey::from_key_event(key) {
                app.status_message = None;
                app.dispatch(index, SelectEvent::Key(key))?;
            }
        }
    }
    Ok(())
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Result<(), Box<dyn std::error::Error>> {
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // An open list is drawn over the widgets below it, so it wins.
            let hit = app
                .focus
                .filter(|&i| app.states[i].is_open())
                .and_then(|i| app.states[i].layout().hit_test(column, row).map(|t| (i, t)))
                .or_else(|| {
                    app.states
                        .iter()
                        .enumerate()
                        .find_map(|(i, s)| s.layout().hit_test(column, row).map(|t| (i, t)))
                });

            match hit {
                Some((index, target)) => {
                    app.focus_on(index)?;
                    app.status_message = None;
                    app.dispatch(index, SelectEvent::Click(target))?;
                }
                None => app.blur()?,
            }
        }
        MouseEventKind::Moved => {
            if let Some(index) = app.focus.filter(|&i| app.states[i].is_open())
                && let Some(entry) = app.states[index].layout().entry_at(column, row)
            {
                app.dispatch(index, SelectEvent::Hover(entry))?;
            }
        }
        _ => {}
    }
    Ok(())
}
