use crate::navigation::{Locale, Presentation, Screen, TABS};
use crate::ui::theme::Theme;
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Equal-width slot for each tab, left to right.
pub fn item_areas(area: Rect) -> Vec<(Screen, Rect)> {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(TABS.iter().map(|_| Constraint::Ratio(1, TABS.len() as u32)))
        .split(area);
    TABS.iter().copied().zip(chunks.iter().copied()).collect()
}

/// Tab under a click, if any.
pub fn tab_at(area: Rect, column: u16, row: u16) -> Option<Screen> {
    item_areas(area)
        .into_iter()
        .find(|(_, slot)| slot.contains(Position::new(column, row)))
        .map(|(screen, _)| screen)
}

pub fn render(frame: &mut Frame, area: Rect, presentation: &Presentation, locale: Locale) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Theme::bottom_bar_border())
        .style(Theme::bottom_bar());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (screen, slot) in item_areas(inner) {
        let style = if presentation.selected_tab == Some(screen) {
            Theme::tab_selected()
        } else {
            Theme::bottom_bar()
        };
        let item = Paragraph::new(vec![
            Line::styled(screen.icon(), style),
            Line::styled(screen.title(locale), style),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(item, slot);
    }
}
