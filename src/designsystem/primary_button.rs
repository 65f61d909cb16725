use crate::ui::theme::Theme;
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Bordered, centred push button.
///
/// The caller supplies the value produced on click, so the button stays
/// unaware of what it triggers.
#[derive(Debug, Clone)]
pub struct PrimaryButton<M> {
    text: String,
    on_click: M,
    focused: bool,
}

impl<M: Clone> PrimaryButton<M> {
    pub const HEIGHT: u16 = 3;
    const PADDING: u16 = 2;

    pub fn new(text: impl Into<String>, on_click: M) -> Self {
        Self {
            text: text.into(),
            on_click,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Label display width plus padding and borders.
    pub fn width(&self) -> u16 {
        let label = u16::try_from(self.text.width()).unwrap_or(u16::MAX);
        label.saturating_add(2 * Self::PADDING + 2)
    }

    /// Where the button sits when centred horizontally on the first row of
    /// `container`. Clipped to the container.
    pub fn placement(&self, container: Rect) -> Rect {
        let width = self.width().min(container.width);
        let height = Self::HEIGHT.min(container.height);
        let x = container.x + (container.width - width) / 2;
        Rect::new(x, container.y, width, height)
    }

    /// Whether a click at (`column`, `row`) lands on the button placed in
    /// `container`.
    pub fn hit(&self, container: Rect, column: u16, row: u16) -> bool {
        let area = self.placement(container);
        area.width > 0
            && area.height > 0
            && area.contains(Position::new(column, row))
    }

    pub fn click(&self) -> M {
        self.on_click.clone()
    }

    pub fn render(&self, frame: &mut Frame, container: Rect) {
        let area = self.placement(container);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (border_style, label_style) = if self.focused {
            (Theme::button_border_focused(), Theme::button_label_focused())
        } else {
            (Theme::button_border(), Theme::button_label())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let paragraph = Paragraph::new(Line::styled(self.text.as_str(), label_style))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_width_counts_display_columns() {
        // Cyrillic is two bytes per char but one column wide.
        let button = PrimaryButton::new("Профиль", ());
        assert_eq!(button.width(), 7 + 6);
    }

    #[test]
    fn test_placement_is_centred_and_clipped() {
        let button = PrimaryButton::new("Go", ());
        let area = button.placement(Rect::new(0, 5, 20, 10));
        assert_eq!(area, Rect::new(6, 5, 8, 3));

        let narrow = button.placement(Rect::new(0, 0, 4, 2));
        assert_eq!(narrow, Rect::new(0, 0, 4, 2));
    }

    #[test]
    fn test_hit_testing() {
        let button = PrimaryButton::new("Go", 42u8);
        let container = Rect::new(0, 5, 20, 10);
        assert!(button.hit(container, 6, 5));
        assert!(button.hit(container, 13, 7));
        assert!(!button.hit(container, 5, 6));
        assert!(!button.hit(container, 14, 6));
        assert!(!button.hit(container, 10, 8));
        assert_eq!(button.click(), 42);
    }

    #[test]
    fn test_renders_label() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let button = PrimaryButton::new("Go", ()).focused(true);
        terminal.draw(|f| button.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let middle: String = (0..20u16).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(middle.contains("Go"));
        assert_eq!(buffer[(6, 0)].symbol(), "╭");
    }
}
