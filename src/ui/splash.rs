use crate::navigation::{Locale, Screen};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

fn skip_hint(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Enter: пропустить",
        Locale::En => "Enter: skip",
    }
}

pub fn render(frame: &mut Frame, area: Rect, spinner_frame: usize, locale: Locale) {
    let lines = vec![
        Line::styled(spinner_glyph(spinner_frame), Theme::spinner()),
        Line::default(),
        Line::styled(Screen::Splash.title(locale), Theme::content_text()),
        Line::styled(skip_hint(locale), Theme::hint()),
    ];

    let height = lines.len() as u16;
    let top = area.height.saturating_sub(height) / 2;
    let centred = Rect::new(area.x, area.y + top, area.width, area.height - top);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centred,
    );
}
