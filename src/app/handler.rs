use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::navigation::{Screen, TABS};
use crate::ui::{bottom_bar, content, layout, top_bar};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::trace;

const PAGE: u16 = 3;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::SplashElapsed => {
            state.nav.complete_splash();
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    if state.on_splash() {
        state.advance_spinner();
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Char('q') {
        return vec![Action::Quit];
    }

    if state.on_splash() {
        return handle_splash_key(state, key);
    }

    match key.code {
        KeyCode::Char('1') | KeyCode::Char('h') => select_tab(state, Screen::Home),
        KeyCode::Char('2') | KeyCode::Char('p') => select_tab(state, Screen::Profile),
        KeyCode::Left => select_tab(state, neighbour_tab(state.nav.current(), -1)),
        KeyCode::Right => select_tab(state, neighbour_tab(state.nav.current(), 1)),
        KeyCode::Backspace | KeyCode::Esc => go_back(state),
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') if state.focus == FocusPanel::Button => {
            press_button(state)
        }
        KeyCode::Up => {
            state.scroll_up(1);
            vec![]
        }
        KeyCode::Down => {
            state.scroll_down(1);
            vec![]
        }
        KeyCode::PageUp => {
            state.scroll_up(PAGE);
            vec![]
        }
        KeyCode::PageDown => {
            state.scroll_down(PAGE);
            vec![]
        }
        other => {
            trace!(key = ?other, "unbound key");
            vec![]
        }
    }
}

fn handle_splash_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => skip_splash(state),
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let (column, row) = (mouse.column, mouse.row);

    if state.on_splash() {
        return skip_splash(state);
    }

    let presentation = state.nav.presentation();
    let shell = layout::compute_layout(state.viewport, &presentation);

    if let Some(bar) = shell.bottom_bar {
        if let Some(tab) = bottom_bar::tab_at(bar, column, row) {
            return select_tab(state, tab);
        }
    }

    if let Some(back) = shell
        .top_bar
        .and_then(|bar| top_bar::back_button_area(bar, &presentation))
    {
        if back.contains((column, row).into()) {
            return go_back(state);
        }
    }

    let (_, button_area) = content::split(shell.content);
    let clicked = state
        .current_button()
        .is_some_and(|b| b.hit(button_area, column, row));
    if clicked {
        state.focus = FocusPanel::Button;
        return press_button(state);
    }

    vec![]
}

/// Leave Splash early. The pending timer is now stale and can be dropped.
fn skip_splash(state: &mut AppState) -> Vec<Action> {
    if state.nav.navigate_to(Screen::Home) {
        vec![Action::CancelSplashTimer]
    } else {
        vec![]
    }
}

fn select_tab(state: &mut AppState, tab: Screen) -> Vec<Action> {
    if state.nav.navigate_to(tab) {
        state.focus = FocusPanel::Content;
    }
    vec![]
}

fn go_back(state: &mut AppState) -> Vec<Action> {
    if state.nav.go_back() {
        state.focus = FocusPanel::Content;
    }
    vec![]
}

fn press_button(state: &mut AppState) -> Vec<Action> {
    match state.current_button() {
        Some(button) => select_tab(state, button.click()),
        None => vec![],
    }
}

/// Tab `step` positions away in bar order, wrapping at the ends.
fn neighbour_tab(current: Screen, step: isize) -> Screen {
    let len = TABS.len() as isize;
    let idx = TABS.iter().position(|&t| t == current).unwrap_or(0) as isize;
    TABS[(idx + step).rem_euclid(len) as usize]
}
