//! Tab screens: a centred title, a short scrollable body, and the screen's
//! primary button.

use crate::designsystem::PrimaryButton;
use crate::navigation::{Locale, Screen, TabState};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

fn body_lines(screen: Screen, locale: Locale) -> &'static [&'static str] {
    match (screen, locale) {
        (Screen::Splash, _) => &[],
        (Screen::Home, Locale::Ru) => &[
            "Добро пожаловать!",
            "",
            "Переключайте вкладки внизу экрана",
            "или клавишами 1 и 2.",
            "Backspace возвращает назад.",
        ],
        (Screen::Home, Locale::En) => &[
            "Welcome!",
            "",
            "Switch tabs with the bar below",
            "or with the 1 and 2 keys.",
            "Backspace goes back.",
        ],
        (Screen::Profile, Locale::Ru) => &[
            "Здесь будет профиль пользователя.",
            "",
            "Позиция прокрутки сохраняется",
            "при переключении вкладок.",
        ],
        (Screen::Profile, Locale::En) => &[
            "The user profile lives here.",
            "",
            "Scroll position is kept",
            "across tab switches.",
        ],
    }
}

/// Lines the body can scroll past while keeping one visible.
pub fn max_scroll(screen: Screen, locale: Locale) -> u16 {
    u16::try_from(body_lines(screen, locale).len())
        .unwrap_or(u16::MAX)
        .saturating_sub(1)
}

pub fn button_for(screen: Screen, locale: Locale) -> Option<PrimaryButton<Screen>> {
    let (text, target) = match (screen, locale) {
        (Screen::Splash, _) => return None,
        (Screen::Home, Locale::Ru) => ("Открыть профиль", Screen::Profile),
        (Screen::Home, Locale::En) => ("Open profile", Screen::Profile),
        (Screen::Profile, Locale::Ru) => ("На главную", Screen::Home),
        (Screen::Profile, Locale::En) => ("Go home", Screen::Home),
    };
    Some(PrimaryButton::new(text, target))
}

/// Split screen content into the text body and the button row beneath it.
pub fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                              // Title + body
            Constraint::Length(PrimaryButton::<()>::HEIGHT), // Button
            Constraint::Length(1),                           // Spacer
        ])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    screen: Screen,
    locale: Locale,
    tab: TabState,
    button: Option<&PrimaryButton<Screen>>,
) {
    let (body_area, button_area) = split(area);

    let mut lines = vec![
        Line::styled(screen.title(locale), Theme::content_title()),
        Line::default(),
    ];
    lines.extend(
        body_lines(screen, locale)
            .iter()
            .skip(tab.scroll as usize)
            .map(|l| Line::styled(*l, Theme::content_text())),
    );

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let top = body_area.height.saturating_sub(height) / 2;
    let text_area = Rect::new(
        body_area.x,
        body_area.y + top,
        body_area.width,
        body_area.height - top,
    );
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );

    if let Some(button) = button {
        button.render(frame, button_area);
    }
}
