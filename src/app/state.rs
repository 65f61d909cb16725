use crate::config::AppConfig;
use crate::designsystem::PrimaryButton;
use crate::navigation::{NavigationController, Screen};
use crate::ui::content;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Content,
    Button,
}

pub struct AppState {
    pub config: AppConfig,
    pub nav: NavigationController,
    pub focus: FocusPanel,
    /// Last known terminal size, used to map mouse clicks onto widgets.
    pub viewport: Rect,
    pub spinner_frame: usize,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let nav = NavigationController::new(config.ui.locale);
        Self {
            config,
            nav,
            focus: FocusPanel::Content,
            viewport: Rect::default(),
            spinner_frame: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn on_splash(&self) -> bool {
        self.nav.current() == Screen::Splash
    }

    /// The button shown on the current screen, if any.
    pub fn current_button(&self) -> Option<PrimaryButton<Screen>> {
        content::button_for(self.nav.current(), self.nav.locale())
            .map(|b| b.focused(self.focus == FocusPanel::Button))
    }

    pub fn cycle_focus(&mut self) {
        if self.on_splash() {
            return;
        }
        self.focus = match self.focus {
            FocusPanel::Content => FocusPanel::Button,
            FocusPanel::Button => FocusPanel::Content,
        };
        self.dirty = true;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.nav.tab_state_mut().scroll_up(lines);
        self.dirty = true;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max = content::max_scroll(self.nav.current(), self.nav.locale());
        self.nav.tab_state_mut().scroll_down(lines, max);
        self.dirty = true;
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}
