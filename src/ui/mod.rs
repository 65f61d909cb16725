pub mod bottom_bar;
pub mod content;
pub mod layout;
pub mod splash;
pub mod theme;
pub mod top_bar;

use crate::app::state::AppState;
use crate::navigation::Screen;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let presentation = state.nav.presentation();
    let locale = state.nav.locale();
    let shell = layout::compute_layout(area, &presentation);

    if let Some(top) = shell.top_bar {
        top_bar::render(frame, top, &presentation);
    }

    match state.nav.current() {
        Screen::Splash => splash::render(frame, shell.content, state.spinner_frame, locale),
        screen => {
            let button = state.current_button();
            content::render(
                frame,
                shell.content,
                screen,
                locale,
                state.nav.tab_state(),
                button.as_ref(),
            );
        }
    }

    if let Some(bottom) = shell.bottom_bar {
        bottom_bar::render(frame, bottom, &presentation, locale);
    }
}
