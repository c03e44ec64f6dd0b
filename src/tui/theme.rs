use ratatui::prelude::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct Theme;

impl Theme {
    /// The primary color for borders, focuses, and active elements.
    pub const PRIMARY: Color = Color::Rgb(46, 204, 113); // Emerald Green
    /// The secondary color for highlights and accents.
    pub const SECONDARY: Color = Color::Rgb(26, 188, 156); // Turquoise / Mint

    pub const ERROR: Color = Color::Red;

    // Text colors
    pub const TEXT_NORMAL: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;

    pub fn new() -> Self {
        Self
    }

    // --- Block / Border Styles ---

    /// Border of a select container that has focus.
    pub fn block_active(&self) -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn block_inactive(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    // --- Text Styles ---

    pub fn text_normal(&self) -> Style {
        Style::default().fg(Self::TEXT_NORMAL)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    // --- Select Styles ---

    /// One selected option in the value area (multiple mode).
    pub fn badge(&self) -> Style {
        Style::default().bg(Color::DarkGray).fg(Self::TEXT_NORMAL)
    }

    pub fn badge_remove(&self) -> Style {
        self.badge().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn clear_button(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM).add_modifier(Modifier::BOLD)
    }

    pub fn divider(&self) -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn caret(&self, open: bool) -> Style {
        if open {
            Style::default().fg(Self::PRIMARY)
        } else {
            Style::default().fg(Self::TEXT_DIM)
        }
    }

    /// Style of a list entry. Selected and highlighted are independent and
    /// stack: the highlight sets the background, selection makes it bold.
    pub fn option(&self, selected: bool, highlighted: bool) -> Style {
        let mut style = self.text_normal();
        if highlighted {
            style = style.bg(Self::PRIMARY).fg(Color::Black);
        }
        if selected {
            style = style.add_modifier(Modifier::BOLD);
            if !highlighted {
                style = style.fg(Self::SECONDARY);
            }
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_and_highlighted_stack() {
        let theme = Theme::new();
        let both = theme.option(true, true);
        assert_eq!(both.bg, Some(Theme::PRIMARY));
        assert!(both.add_modifier.contains(Modifier::BOLD));

        assert_eq!(theme.option(true, false).fg, Some(Theme::SECONDARY));
        assert_eq!(theme.option(false, false), theme.text_normal());
    }

    #[test]
    fn badge_remove_uses_the_error_color() {
        assert_eq!(Theme::new().badge_remove().fg, Some(Theme::ERROR));
    }
}
