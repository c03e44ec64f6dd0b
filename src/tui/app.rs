use super::event::handle_event;
use super::ui::ui;
use crate::config::{ConfigManager, Field};
use crate::tui::components::select::{SelectError, SelectProps, SelectState, SelectValue};
use crate::tui::event::select::SelectEvent;
use crate::tui::listener::ListenerRegistry;
use log::{debug, info};
use ratatui::crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::Backend;
use ratatui::{Terminal, prelude::CrosstermBackend};

use std::io;

/// The demo form: one select widget per configured field. The app owns every
/// selection value and hands it to its widget on each frame.
pub struct App {
    pub fields: Vec<Field>,
    pub values: Vec<SelectValue>,
    pub states: Vec<SelectState>,
    pub focus: Option<usize>,
    pub listeners: ListenerRegistry,
    pub shutdown: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(fields: Vec<Field>) -> App {
        let values = fields.iter().map(|f| f.initial.clone()).collect();
        let states = fields.iter().map(|_| SelectState::new()).collect();

        let mut app = App {
            fields,
            values,
            states,
            focus: None,
            listeners: ListenerRegistry::new(),
            shutdown: false,
            status_message: None,
        };
        app.sync_listeners();
        app
    }

    pub fn props(&self, index: usize) -> Result<SelectProps<'_>, SelectError> {
        let field = &self.fields[index].config;
        SelectProps::new(&field.options, field.multiple, &self.values[index])
    }

    /// Deliver `event` to widget `index` and store any selection it reports.
    pub fn dispatch(&mut self, index: usize, event: SelectEvent) -> Result<(), SelectError> {
        let field = &self.fields[index].config;
        let props = SelectProps::new(&field.options, field.multiple, &self.values[index])?;

        let mut change = None;
        self.states[index].handle_event(&props, event, |next| change = Some(next));

        if let Some(next) = change {
            let labels = next.labels().join(", ");
            info!("{} changed to [{labels}]", field.name);
            self.status_message = Some(if labels.is_empty() {
                format!("{}: cleared", field.name)
            } else {
                format!("{}: {labels}", field.name)
            });
            self.values[index] = next;
        }

        self.sync_listeners();
        Ok(())
    }

    /// Move focus to `index`, blurring whatever had it.
    pub fn focus_on(&mut self, index: usize) -> Result<(), SelectError> {
        if self.focus == Some(index) {
            return Ok(());
        }
        self.blur()?;
        debug!("focus moved to {}", self.fields[index].config.name);
        self.focus = Some(index);
        self.dispatch(index, SelectEvent::Focus)
    }

    pub fn blur(&mut self) -> Result<(), SelectError> {
        if let Some(previous) = self.focus.take() {
            self.dispatch(previous, SelectEvent::Blur)?;
        }
        Ok(())
    }

    pub fn focus_next(&mut self) -> Result<(), SelectError> {
        if self.fields.is_empty() {
            return Ok(());
        }
        let next = self.focus.map_or(0, |i| (i + 1) % self.fields.len());
        self.focus_on(next)
    }

    pub fn focus_previous(&mut self) -> Result<(), SelectError> {
        if self.fields.is_empty() {
            return Ok(());
        }
        let len = self.fields.len();
        let previous = self.focus.map_or(len - 1, |i| (i + len - 1) % len);
        self.focus_on(previous)
    }

    pub fn focused_is_open(&self) -> bool {
        self.focus.is_some_and(|i| self.states[i].is_open())
    }

    /// Re-register keyboard listeners whose dependencies changed.
    pub fn sync_listeners(&mut self) {
        for (index, (state, field)) in self.states.iter_mut().zip(&self.fields).enumerate() {
            state.sync_listener(&self.listeners, index, &field.config.options);
        }
    }

    pub fn run(config_manager: ConfigManager) -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(config_manager.fields);
        app.focus_next()?;
        info!(
            "starting ui with {} fields from {}",
            app.fields.len(),
            config_manager.path.display()
        );

        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(
            stderr,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend)?;

        let res = run_app(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        )?;
        terminal.show_cursor()?;

        for (field, value) in app.fields.iter().zip(&app.values) {
            info!("final {}: [{}]", field.config.name, value.labels().join(", "));
        }

        res
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if app.shutdown {
            return Ok(());
        }

        let mut draw_result = Ok(());
        terminal.draw(|frame| draw_result = ui(frame, app))?;
        draw_result?;

        handle_event(app)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{validate, models::FieldsFile};
    use crate::tui::event::select::{ClickTarget, SelectKey};

    fn app() -> App {
        App::new(validate(FieldsFile::sample()).unwrap())
    }

    #[test]
    fn every_widget_listens_from_the_start() {
        let app = app();
        assert_eq!(app.listeners.live_count(), app.fields.len());
        assert!(app.states.iter().all(SelectState::is_listening));
    }

    #[test]
    fn focus_moves_and_blurs() {
        let mut app = app();
        app.focus_next().unwrap();
        assert_eq!(app.focus, Some(0));

        app.dispatch(0, SelectEvent::Key(SelectKey::Enter)).unwrap();
        assert!(app.focused_is_open());

        app.focus_next().unwrap();
        assert_eq!(app.focus, Some(1));
        assert!(!app.states[0].is_open());
        assert!(!app.states[0].is_focused());
        assert!(app.states[1].is_focused());

        app.focus_previous().unwrap();
        app.focus_previous().unwrap();
        assert_eq!(app.focus, Some(2));
    }

    #[test]
    fn changes_land_in_app_values() {
        let mut app = app();
        app.focus_on(0).unwrap();
        app.dispatch(0, SelectEvent::Click(ClickTarget::Container)).unwrap();
        app.dispatch(0, SelectEvent::Click(ClickTarget::Option(2))).unwrap();

        assert_eq!(app.values[0].labels(), vec!["Zig"]);
        assert_eq!(app.status_message.as_deref(), Some("Language: Zig"));

        app.dispatch(1, SelectEvent::Click(ClickTarget::ClearButton)).unwrap();
        assert_eq!(app.values[1], SelectValue::Multiple(vec![]));
        assert_eq!(app.status_message.as_deref(), Some("Editions: cleared"));
    }

    #[test]
    fn listener_is_renewed_after_navigation() {
        let mut app = app();
        app.focus_on(0).unwrap();
        let before = app.listeners.attach_count();

        app.dispatch(0, SelectEvent::Key(SelectKey::Down)).unwrap();
        app.dispatch(0, SelectEvent::Key(SelectKey::Down)).unwrap();

        assert_eq!(app.listeners.attach_count(), before + 2);
        assert_eq!(app.listeners.live_count(), app.fields.len());
    }
}
