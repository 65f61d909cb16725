use crate::navigation::Presentation;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const BACK_ARROW: &str = " ← ";

/// Clickable region of the back arrow, if the bar shows one.
pub fn back_button_area(area: Rect, presentation: &Presentation) -> Option<Rect> {
    presentation.show_back_button.then(|| {
        let width = (BACK_ARROW.chars().count() as u16).min(area.width);
        Rect::new(area.x, area.y, width, area.height.min(1))
    })
}

pub fn render(frame: &mut Frame, area: Rect, presentation: &Presentation) {
    let mut parts: Vec<Span> = Vec::new();

    if presentation.show_back_button {
        parts.push(Span::styled(BACK_ARROW, Theme::back_button()));
    } else {
        parts.push(Span::styled(" ", Theme::top_bar()));
    }
    parts.push(Span::styled(presentation.title, Theme::title()));

    let paragraph = Paragraph::new(Line::from(parts)).style(Theme::top_bar());
    frame.render_widget(paragraph, area);
}
