//! Rendering for the select widget.
//!
//! Rendering is a pure function of the props and the UI state. Each pass
//! returns a [`SelectLayout`] describing where the clickable parts ended up,
//! which the host keeps for hit-testing mouse input.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::components::select::{SelectProps, SelectState, SelectValue};
use crate::tui::event::select::ClickTarget;
use crate::tui::theme::Theme;

/// Rows shown in the open list before it scrolls.
pub const MAX_VISIBLE_OPTIONS: usize = 6;
pub const PLACEHOLDER: &str = "Select...";
pub const CONTAINER_HEIGHT: u16 = 3;

const REMOVE_MARK: &str = "×";
const SELECTED_MARK: &str = "✓ ";
const CARET_CLOSED: &str = "▾";
const CARET_OPEN: &str = "▴";

/// Screen regions of one rendered select widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectLayout {
    pub container: Rect,
    pub clear: Rect,
    /// One rect per drawn badge, in selection order.
    pub badges: Vec<Rect>,
    pub list: Option<Rect>,
    /// Visible list entries as (option index, row).
    pub entries: Vec<(usize, Rect)>,
}

impl SelectLayout {
    /// Resolve a click position to the most specific control under it.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);

        if let Some(index) = self.entry_at(column, row) {
            return Some(ClickTarget::Option(index));
        }
        // The list hangs off the container, so its border counts as the container.
        if self.list.is_some_and(|list| list.contains(position)) {
            return Some(ClickTarget::Container);
        }
        if self.clear.contains(position) {
            return Some(ClickTarget::ClearButton);
        }
        if let Some(index) = self.badges.iter().position(|b| b.contains(position)) {
            return Some(ClickTarget::Badge(index));
        }
        if self.container.contains(position) {
            return Some(ClickTarget::Container);
        }
        None
    }

    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.entries
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(index, _)| *index)
    }
}

/// Draw the container and, when open, the option list below it.
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    props: &SelectProps<'_>,
    state: &SelectState,
    title: &str,
) -> SelectLayout {
    let mut layout = render_container(frame, area, props, state, title);
    render_list(frame, props, state, &mut layout);
    layout
}

/// Draw the closed part of the widget: current value, clear control,
/// divider and caret.
pub fn render_container(
    frame: &mut Frame<'_>,
    area: Rect,
    props: &SelectProps<'_>,
    state: &SelectState,
    title: &str,
) -> SelectLayout {
    let theme = Theme::new();

    let border_style = if state.is_focused() {
        theme.block_active()
    } else {
        theme.block_inactive()
    };
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [value_area, clear_area, divider_area, caret_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let badges = match props.value() {
        SelectValue::Multiple(selected) if !selected.is_empty() => {
            render_badges(frame, value_area, selected.iter().map(|o| o.label.as_str()))
        }
        SelectValue::Single(Some(option)) => {
            frame.render_widget(Line::styled(option.label.clone(), theme.text_normal()), value_area);
            Vec::new()
        }
        _ => {
            frame.render_widget(Line::styled(PLACEHOLDER, theme.text_dim()), value_area);
            Vec::new()
        }
    };

    frame.render_widget(Span::styled(REMOVE_MARK, theme.clear_button()), clear_area);
    frame.render_widget(Span::styled(" │ ", theme.divider()), divider_area);
    let caret = if state.is_open() { CARET_OPEN } else { CARET_CLOSED };
    frame.render_widget(Span::styled(caret, theme.caret(state.is_open())), caret_area);

    SelectLayout {
        container: area,
        clear: clear_area,
        badges,
        list: None,
        entries: Vec::new(),
    }
}

// Lays badges out left to right; the ones that do not fit are summarised as "+N".
fn render_badges<'a>(
    frame: &mut Frame<'_>,
    area: Rect,
    labels: impl ExactSizeIterator<Item = &'a str>,
) -> Vec<Rect> {
    let theme = Theme::new();
    let total = labels.len();
    let mut rects = Vec::with_capacity(total);
    let mut x = area.x;

    for label in labels {
        let width = (label.width() + 4) as u16;
        if x.saturating_add(width) > area.right() {
            let rest = format!("+{}", total - rects.len());
            let room = area.right().saturating_sub(x);
            let rest_area = Rect::new(x, area.y, room, 1);
            frame.render_widget(Span::styled(rest, theme.text_dim()), rest_area);
            break;
        }

        let rect = Rect::new(x, area.y, width, 1);
        let badge = Line::from(vec![
            Span::styled(format!(" {label} "), theme.badge()),
            Span::styled(format!("{REMOVE_MARK} "), theme.badge_remove()),
        ]);
        frame.render_widget(badge, rect);
        rects.push(rect);
        x = x.saturating_add(width + 1);
    }

    rects
}

/// Draw the option list under the container when the widget is open and
/// record the visible entries in `layout`.
pub fn render_list(
    frame: &mut Frame<'_>,
    props: &SelectProps<'_>,
    state: &SelectState,
    layout: &mut SelectLayout,
) {
    layout.list = None;
    layout.entries.clear();
    if !state.is_open() {
        return;
    }

    let theme = Theme::new();
    let options = props.options();
    let rows = options.len().clamp(1, MAX_VISIBLE_OPTIONS) as u16;
    let container = layout.container;
    let area = Rect::new(container.x, container.bottom(), container.width, rows + 2)
        .intersection(frame.area());
    if area.is_empty() {
        return;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.block_active());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    layout.list = Some(area);

    if options.is_empty() {
        frame.render_widget(Line::styled("No options", theme.text_dim()), inner);
        return;
    }

    let visible = inner.height as usize;
    let offset = scroll_offset(state.highlighted_index(), visible, options.len());

    for (row, (index, option)) in options
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        let selected = props.is_option_selected(option);
        let highlighted = index == state.highlighted_index();
        let marker = if selected { SELECTED_MARK } else { "  " };

        frame.render_widget(
            Line::styled(
                format!("{marker}{}", option.label),
                theme.option(selected, highlighted),
            ),
            rect,
        );
        layout.entries.push((index, rect));
    }
}

/// First visible entry so that `highlighted` stays on screen.
pub fn scroll_offset(highlighted: usize, visible: usize, len: usize) -> usize {
    if visible == 0 || highlighted < visible {
        return 0;
    }
    (highlighted + 1 - visible).min(len.saturating_sub(visible))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_keeps_highlight_visible() {
        assert_eq!(scroll_offset(0, 6, 9), 0);
        assert_eq!(scroll_offset(5, 6, 9), 0);
        assert_eq!(scroll_offset(6, 6, 9), 1);
        assert_eq!(scroll_offset(8, 6, 9), 3);
        assert_eq!(scroll_offset(3, 0, 9), 0);
    }

    #[test]
    fn hit_test_prefers_specific_controls() {
        let layout = SelectLayout {
            container: Rect::new(0, 0, 20, 3),
            clear: Rect::new(14, 1, 1, 1),
            badges: vec![Rect::new(1, 1, 5, 1), Rect::new(7, 1, 5, 1)],
            list: Some(Rect::new(0, 3, 20, 4)),
            entries: vec![(0, Rect::new(1, 4, 18, 1)), (1, Rect::new(1, 5, 18, 1))],
        };

        assert_eq!(layout.hit_test(14, 1), Some(ClickTarget::ClearButton));
        assert_eq!(layout.hit_test(8, 1), Some(ClickTarget::Badge(1)));
        assert_eq!(layout.hit_test(0, 0), Some(ClickTarget::Container));
        assert_eq!(layout.hit_test(3, 5), Some(ClickTarget::Option(1)));
        assert_eq!(layout.hit_test(0, 6), Some(ClickTarget::Container));
        assert_eq!(layout.hit_test(30, 1), None);
        assert_eq!(layout.entry_at(3, 4), Some(0));
    }
}
