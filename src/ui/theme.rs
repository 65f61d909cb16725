use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const BG_ELEVATED: Color = Color::Rgb(36, 39, 58);
    pub const BORDER_DIM: Color = Color::Rgb(73, 77, 100);
    pub const TEXT_PRIMARY: Color = Color::Rgb(202, 211, 245);
    pub const TEXT_SECONDARY: Color = Color::Rgb(165, 173, 203);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 115, 141);
    pub const ACCENT_TEAL: Color = Color::Rgb(139, 213, 202);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(183, 189, 248);

    pub fn top_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn title() -> Style {
        Self::top_bar().add_modifier(Modifier::BOLD)
    }

    pub fn back_button() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn bottom_bar() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_ELEVATED)
    }

    pub fn bottom_bar_border() -> Style {
        Style::default().fg(Self::BORDER_DIM).bg(Self::BG_ELEVATED)
    }

    pub fn tab_selected() -> Style {
        Style::default()
            .fg(Self::ACCENT_LAVENDER)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn content_title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn content_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn spinner() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn hint() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn button_border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn button_border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn button_label() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn button_label_focused() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }
}
