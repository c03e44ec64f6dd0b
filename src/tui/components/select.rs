use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::trace;

use crate::config::models::SelectOption;
use crate::tui::listener::{KeyListener, ListenerRegistry};
use crate::tui::widgets::select::SelectLayout;

/// Rejected widget input. These are caller mistakes, caught once when the
/// props are built rather than while handling events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("value shape does not match mode (multiple = {multiple})")]
    ModeMismatch { multiple: bool },

    #[error("option '{label}' appears more than once")]
    DuplicateOption { label: String },

    #[error("'{value}' is not one of the available options")]
    UnknownValue { value: String },

    #[error("option '{label}' is selected more than once")]
    DuplicateSelection { label: String },
}

/// The caller-owned selection. The variant is the selection mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectValue {
    Single(Option<SelectOption>),
    /// Selection order, no duplicates.
    Multiple(Vec<SelectOption>),
}

impl SelectValue {
    pub fn is_multiple(&self) -> bool {
        matches!(self, SelectValue::Multiple(_))
    }

    /// The selected options in display order.
    pub fn selected(&self) -> &[SelectOption] {
        match self {
            SelectValue::Single(Some(option)) => std::slice::from_ref(option),
            SelectValue::Single(None) => &[],
            SelectValue::Multiple(options) => options,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.selected().iter().map(|o| o.label.as_str()).collect()
    }
}

/// Everything a select widget is handed by its caller for one frame or one
/// event: the option list and the current value. Built through
/// [`SelectProps::new`], which validates the pair.
#[derive(Debug, Clone, Copy)]
pub struct SelectProps<'a> {
    options: &'a [SelectOption],
    value: &'a SelectValue,
}

impl<'a> SelectProps<'a> {
    pub fn new(
        options: &'a [SelectOption],
        multiple: bool,
        value: &'a SelectValue,
    ) -> Result<Self, SelectError> {
        if value.is_multiple() != multiple {
            return Err(SelectError::ModeMismatch { multiple });
        }

        let mut seen = HashSet::new();
        for option in options {
            if !seen.insert(option) {
                return Err(SelectError::DuplicateOption {
                    label: option.label.clone(),
                });
            }
        }

        let mut picked = HashSet::new();
        for option in value.selected() {
            if !seen.contains(option) {
                return Err(SelectError::UnknownValue {
                    value: option.value.to_string(),
                });
            }
            if !picked.insert(option) {
                return Err(SelectError::DuplicateSelection {
                    label: option.label.clone(),
                });
            }
        }

        Ok(Self { options, value })
    }

    pub fn options(&self) -> &'a [SelectOption] {
        self.options
    }

    pub fn value(&self) -> &'a SelectValue {
        self.value
    }

    pub fn is_multiple(&self) -> bool {
        self.value.is_multiple()
    }

    /// The empty value for the current mode.
    pub fn clear_options(&self) -> SelectValue {
        match self.value {
            SelectValue::Single(_) => SelectValue::Single(None),
            SelectValue::Multiple(_) => SelectValue::Multiple(Vec::new()),
        }
    }

    /// The value after choosing `option`, or `None` when nothing changes.
    ///
    /// In multiple mode this toggles membership, appending new picks at the
    /// end. In single mode choosing the current option is a no-op.
    pub fn select_option(&self, option: &SelectOption) -> Option<SelectValue> {
        match self.value {
            SelectValue::Multiple(selected) => {
                let next = if selected.contains(option) {
                    selected.iter().filter(|o| *o != option).cloned().collect()
                } else {
                    let mut next = selected.clone();
                    next.push(option.clone());
                    next
                };
                Some(SelectValue::Multiple(next))
            }
            SelectValue::Single(current) => {
                if current.as_ref() == Some(option) {
                    None
                } else {
                    Some(SelectValue::Single(Some(option.clone())))
                }
            }
        }
    }

    pub fn is_option_selected(&self, option: &SelectOption) -> bool {
        match self.value {
            SelectValue::Multiple(selected) => selected.contains(option),
            SelectValue::Single(current) => current.as_ref() == Some(option),
        }
    }
}

/// The values the keyboard listener depends on. A change in any of them
/// replaces the registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerDeps {
    is_open: bool,
    highlighted_index: usize,
    options: u64,
}

fn options_fingerprint(options: &[SelectOption]) -> u64 {
    let mut hasher = DefaultHasher::new();
    options.hash(&mut hasher);
    hasher.finish()
}

/// Transient UI state of one select widget instance. The selection itself is
/// never stored here.
#[derive(Debug, Default)]
pub struct SelectState {
    is_open: bool,
    highlighted_index: usize,
    focused: bool,
    layout: SelectLayout,
    listener: Option<KeyListener>,
    listener_deps: Option<ListenerDeps>,
}

impl SelectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted_index
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Opening from closed always starts the highlight at the first entry.
    pub fn set_open(&mut self, open: bool) {
        if open && !self.is_open {
            self.highlighted_index = 0;
        }
        if open != self.is_open {
            trace!("select {}", if open { "opened" } else { "closed" });
        }
        self.is_open = open;
    }

    pub fn toggle_open(&mut self) {
        self.set_open(!self.is_open);
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Move the highlight by `delta`, ignoring moves that would leave
    /// `[0, option_count)`.
    pub(crate) fn move_highlight(&mut self, delta: isize, option_count: usize) {
        let Some(next) = self.highlighted_index.checked_add_signed(delta) else {
            return;
        };
        if next < option_count {
            self.highlighted_index = next;
        }
    }

    pub(crate) fn set_highlighted_index(&mut self, index: usize) {
        self.highlighted_index = index;
    }

    /// Hit regions from the most recent render.
    pub fn layout(&self) -> &SelectLayout {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: SelectLayout) {
        self.layout = layout;
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// Keep the keyboard registration in step with the values it depends
    /// on. When any of them changed, the old registration is released
    /// before the new one is taken.
    pub fn sync_listener(
        &mut self,
        registry: &ListenerRegistry,
        target: usize,
        options: &[SelectOption],
    ) {
        let deps = ListenerDeps {
            is_open: self.is_open,
            highlighted_index: self.highlighted_index,
            options: options_fingerprint(options),
        };

        if self.listener.is_some() && self.listener_deps == Some(deps) {
            return;
        }

        self.listener = None;
        self.listener = Some(registry.attach(target));
        self.listener_deps = Some(deps);
    }

    /// Drop the keyboard registration, e.g. when the widget is removed.
    pub fn detach_listener(&mut self) {
        self.listener = None;
        self.listener_deps = None;
    }
}
