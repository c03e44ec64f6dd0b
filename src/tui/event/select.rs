use log::debug;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::components::select::{SelectProps, SelectState, SelectValue};

/// Keys the select widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKey {
    Enter,
    Space,
    Up,
    Down,
    Escape,
}

impl SelectKey {
    /// Map a terminal key press; anything the widget ignores maps to `None`.
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        match key.code {
            KeyCode::Enter => Some(SelectKey::Enter),
            KeyCode::Char(' ') => Some(SelectKey::Space),
            KeyCode::Up => Some(SelectKey::Up),
            KeyCode::Down => Some(SelectKey::Down),
            KeyCode::Esc => Some(SelectKey::Escape),
            _ => None,
        }
    }
}

/// The part of the widget a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Anywhere on the widget not covered by a more specific control.
    Container,
    ClearButton,
    /// The badge of the n-th selected option (multiple mode).
    Badge(usize),
    /// The n-th entry of the option list.
    Option(usize),
}

/// Input delivered to a select widget by its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectEvent {
    Focus,
    Blur,
    Key(SelectKey),
    Click(ClickTarget),
    /// The pointer moved over the n-th list entry.
    Hover(usize),
}

impl SelectState {
    /// Apply one input event. `on_change` is called at most once, with the
    /// complete next value, when the event changes the selection.
    pub fn handle_event<F>(&mut self, props: &SelectProps<'_>, event: SelectEvent, mut on_change: F)
    where
        F: FnMut(SelectValue),
    {
        let options = props.options();

        match event {
            SelectEvent::Focus => self.set_focused(true),
            SelectEvent::Blur => {
                self.set_focused(false);
                self.set_open(false);
            }
            SelectEvent::Key(key) => {
                // Keys only count while the container itself has focus.
                if !self.is_focused() {
                    return;
                }
                match key {
                    SelectKey::Enter | SelectKey::Space => {
                        let was_open = self.is_open();
                        if was_open
                            && let Some(option) = options.get(self.highlighted_index())
                            && let Some(next) = props.select_option(option)
                        {
                            debug!("select committed '{}' from keyboard", option.label);
                            on_change(next);
                        }
                        self.set_open(!was_open);
                    }
                    SelectKey::Up | SelectKey::Down => {
                        if !self.is_open() {
                            self.set_open(true);
                            return;
                        }
                        let delta = if key == SelectKey::Down { 1 } else { -1 };
                        self.move_highlight(delta, options.len());
                    }
                    SelectKey::Escape => self.set_open(false),
                }
            }
            SelectEvent::Click(target) => match target {
                ClickTarget::Container => self.toggle_open(),
                ClickTarget::ClearButton => on_change(props.clear_options()),
                ClickTarget::Badge(index) => {
                    if let SelectValue::Multiple(selected) = props.value()
                        && let Some(option) = selected.get(index)
                        && let Some(next) = props.select_option(option)
                    {
                        debug!("select removed '{}' from badge", option.label);
                        on_change(next);
                    }
                }
                ClickTarget::Option(index) => {
                    if !self.is_open() {
                        return;
                    }
                    let Some(option) = options.get(index) else {
                        return;
                    };
                    if let Some(next) = props.select_option(option) {
                        debug!("select committed '{}' from list", option.label);
                        on_change(next);
                    }
                    self.set_open(false);
                }
            },
            SelectEvent::Hover(index) => {
                if self.is_open() && index < options.len() {
                    self.set_highlighted_index(index);
                }
            }
        }
    }
}
