//! Navigation state machine: the active screen, the back stack, and
//! per-tab saved state.
//!
//! ```text
//!   Splash ──(delay / skip)──► Home ◄──(tab)──► Profile
//!                               ▲                  │
//!                               └──────(back)──────┘
//! ```
//!
//! Splash is replaced rather than pushed, so it never appears in history.
//! Tab switches pop back to [`START_DESTINATION`] before pushing, which keeps
//! the back stack at most one entry deep.

use super::screen::{Locale, Screen, ScreenInfo, START_DESTINATION};
use std::collections::HashMap;
use tokio::sync::watch;
use tracing::{debug, trace};

/// View state owned by a tab entry and carried across tab switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    pub scroll: u16,
}

impl TabState {
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16, max: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    screen: Screen,
    state: TabState,
}

impl Entry {
    fn new(screen: Screen) -> Self {
        Self {
            screen,
            state: TabState::default(),
        }
    }
}

/// Published on every change to the current screen or the back stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSnapshot {
    pub current: Screen,
    pub back_stack: Vec<Screen>,
    pub revision: u64,
}

/// What the shell chrome should look like for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub title: &'static str,
    pub show_top_bar: bool,
    pub show_back_button: bool,
    pub show_bottom_bar: bool,
    pub selected_tab: Option<Screen>,
}

#[derive(Debug)]
pub struct NavigationController {
    locale: Locale,
    current: Entry,
    back_stack: Vec<Entry>,
    saved: HashMap<&'static str, TabState>,
    revision: u64,
    changes: watch::Sender<NavSnapshot>,
}

impl NavigationController {
    pub fn new(locale: Locale) -> Self {
        let (changes, _) = watch::channel(NavSnapshot {
            current: Screen::Splash,
            back_stack: Vec::new(),
            revision: 0,
        });
        Self {
            locale,
            current: Entry::new(Screen::Splash),
            back_stack: Vec::new(),
            saved: HashMap::new(),
            revision: 0,
            changes,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn current(&self) -> Screen {
        self.current.screen
    }

    pub fn current_screen(&self) -> ScreenInfo {
        self.current.screen.info(self.locale)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn back_stack(&self) -> Vec<Screen> {
        self.back_stack.iter().map(|e| e.screen).collect()
    }

    /// Whether a tab has state saved from an earlier visit, waiting to be
    /// restored on its next selection.
    pub fn has_saved_state(&self, screen: Screen) -> bool {
        self.saved.contains_key(screen.route())
    }

    pub fn tab_state(&self) -> TabState {
        self.current.state
    }

    pub fn tab_state_mut(&mut self) -> &mut TabState {
        &mut self.current.state
    }

    pub fn subscribe(&self) -> watch::Receiver<NavSnapshot> {
        self.changes.subscribe()
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            current: self.current.screen,
            back_stack: self.back_stack(),
            revision: self.revision,
        }
    }

    pub fn presentation(&self) -> Presentation {
        let current = self.current.screen;
        Presentation {
            title: current.title(self.locale),
            show_top_bar: current != Screen::Splash,
            show_back_button: self.can_go_back(),
            show_bottom_bar: current.is_tabbed(),
            selected_tab: current.is_tabbed().then_some(current),
        }
    }

    /// Auto-advance from Splash to Home. A no-op returning `false` once Splash
    /// has already been left, so a late timer fire changes nothing.
    pub fn complete_splash(&mut self) -> bool {
        if self.current.screen != Screen::Splash {
            trace!(current = %self.current.screen, "stale splash completion ignored");
            return false;
        }
        self.replace_splash();
        self.publish();
        true
    }

    /// Switch to a tab. Returns `false` without touching any state when the
    /// target is already current or is Splash.
    pub fn navigate_to(&mut self, target: Screen) -> bool {
        if target == Screen::Splash {
            trace!("splash is not a navigation target");
            return false;
        }
        if target == self.current.screen {
            trace!(target = %target, "already on target tab");
            return false;
        }

        if self.current.screen == Screen::Splash {
            self.replace_splash();
            if target == self.current.screen {
                self.publish();
                return true;
            }
        }

        let from = self.current.screen;
        self.switch_tab(target);
        debug!(from = %from, to = %target, depth = self.back_stack.len(), "tab switch");
        self.publish();
        true
    }

    /// Pop the back stack. Returns `false` when there is nothing to go back
    /// to; leaving the application is up to the host.
    pub fn go_back(&mut self) -> bool {
        let Some(previous) = self.back_stack.pop() else {
            trace!("back with empty stack ignored");
            return false;
        };
        let left = std::mem::replace(&mut self.current, previous);
        debug!(from = %left.screen, to = %self.current.screen, "back");
        self.publish();
        true
    }

    /// Inclusive pop of Splash, then Home as the new root.
    fn replace_splash(&mut self) {
        self.back_stack.clear();
        self.current = Entry::new(Screen::Home);
        debug!("splash replaced by home");
    }

    fn switch_tab(&mut self, target: Screen) {
        let mut stack = std::mem::take(&mut self.back_stack);
        stack.push(self.current);

        // Pop everything above the start destination, saving each tab's state.
        let keep = stack
            .iter()
            .rposition(|e| e.screen == START_DESTINATION)
            .map_or(0, |i| i + 1);
        for popped in stack.drain(keep..) {
            self.saved.insert(popped.screen.route(), popped.state);
        }

        // Single top: reuse the destination if it is already on top.
        self.current = match stack.last() {
            Some(top) if top.screen == target => stack.pop().unwrap_or(Entry::new(target)),
            _ => Entry {
                screen: target,
                state: self.saved.remove(target.route()).unwrap_or_default(),
            },
        };
        self.back_stack = stack;
    }

    fn publish(&mut self) {
        self.revision += 1;
        self.changes.send_replace(self.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_home() -> NavigationController {
        let mut nav = NavigationController::new(Locale::En);
        assert!(nav.complete_splash());
        nav
    }

    #[test]
    fn test_starts_on_splash_without_history() {
        let nav = NavigationController::new(Locale::Ru);
        assert_eq!(nav.current(), Screen::Splash);
        assert!(!nav.can_go_back());
        assert_eq!(nav.current_screen().title, "Загрузка");
    }

    #[test]
    fn test_splash_completion_lands_on_home_root() {
        let nav = on_home();
        assert_eq!(nav.current(), Screen::Home);
        assert!(nav.back_stack().is_empty());
    }

    #[test]
    fn test_stale_splash_completion_is_noop() {
        let mut nav = on_home();
        nav.navigate_to(Screen::Profile);
        let before = nav.snapshot();
        assert!(!nav.complete_splash());
        assert_eq!(nav.snapshot(), before);
    }

    #[test]
    fn test_splash_is_never_a_target() {
        let mut nav = on_home();
        assert!(!nav.navigate_to(Screen::Splash));
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_home_to_profile_enables_back() {
        let mut nav = on_home();
        assert!(nav.navigate_to(Screen::Profile));
        assert_eq!(nav.current(), Screen::Profile);
        assert!(nav.can_go_back());
        assert_eq!(nav.back_stack(), vec![Screen::Home]);
    }

    #[test]
    fn test_same_tab_is_noop() {
        let mut nav = on_home();
        assert!(!nav.navigate_to(Screen::Home));
        assert!(nav.back_stack().is_empty());

        nav.navigate_to(Screen::Profile);
        let before = nav.snapshot();
        assert!(!nav.navigate_to(Screen::Profile));
        assert_eq!(nav.snapshot(), before);
    }

    #[test]
    fn test_back_from_profile_returns_home_and_empties_stack() {
        let mut nav = on_home();
        nav.navigate_to(Screen::Profile);
        assert!(nav.go_back());
        assert_eq!(nav.current(), Screen::Home);
        assert!(!nav.back_stack().contains(&Screen::Home));
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_back_with_empty_stack_is_noop() {
        let mut nav = on_home();
        let before = nav.snapshot();
        assert!(!nav.go_back());
        assert_eq!(nav.snapshot(), before);

        let mut fresh = NavigationController::new(Locale::En);
        assert!(!fresh.go_back());
        assert_eq!(fresh.current(), Screen::Splash);
    }

    #[test]
    fn test_repeated_tab_switches_stay_bounded() {
        let mut nav = on_home();
        for _ in 0..100 {
            nav.navigate_to(Screen::Home);
            nav.navigate_to(Screen::Profile);
            nav.navigate_to(Screen::Home);
            assert!(nav.back_stack().len() <= 1);
        }
        assert_eq!(nav.current(), Screen::Home);
        assert!(nav.back_stack().is_empty());
    }

    #[test]
    fn test_splash_unreachable_after_leaving() {
        let mut nav = on_home();
        let ops: [fn(&mut NavigationController) -> bool; 5] = [
            |n| n.navigate_to(Screen::Profile),
            |n| n.go_back(),
            |n| n.navigate_to(Screen::Home),
            |n| n.go_back(),
            |n| n.complete_splash(),
        ];
        for i in 0..200 {
            ops[(i * 7 + i / 3) % ops.len()](&mut nav);
            assert_ne!(nav.current(), Screen::Splash);
            let stack = nav.back_stack();
            assert!(!stack.contains(&Screen::Splash));
            assert!(stack.windows(2).all(|w| w[0] != w[1]));
        }
    }

    #[test]
    fn test_manual_skip_from_splash_to_profile() {
        let mut nav = NavigationController::new(Locale::En);
        assert!(nav.navigate_to(Screen::Profile));
        assert_eq!(nav.current(), Screen::Profile);
        assert_eq!(nav.back_stack(), vec![Screen::Home]);
        assert!(!nav.complete_splash());
    }

    #[test]
    fn test_home_is_never_saved_while_profile_is() {
        let mut nav = NavigationController::new(Locale::En);
        assert!(nav.navigate_to(Screen::Home));
        assert_eq!(nav.tab_state(), TabState::default());
        assert!(nav.back_stack().is_empty());
        nav.navigate_to(Screen::Profile);
        assert_eq!(nav.tab_state(), TabState::default());
        nav.tab_state_mut().scroll = 1;
        nav.navigate_to(Screen::Home);
        assert_eq!(nav.tab_state(), TabState::default());
        assert!(!nav.has_saved_state(Screen::Home));
        assert!(nav.has_saved_state(Screen::Profile));
    }

    #[test]
    fn test_manual_skip_from_splash_to_home() {
        let mut nav = NavigationController::new(Locale::En);
        assert!(nav.navigate_to(Screen::Home));
        assert_eq!(nav.current(), Screen::Home);
        assert!(nav.back_stack().is_empty());
    }

    #[test]
    fn test_tab_state_restored_on_tab_return() {
        let mut nav = on_home();
        nav.tab_state_mut().scroll = 2;
        nav.navigate_to(Screen::Profile);
        nav.tab_state_mut().scroll = 5;

        nav.navigate_to(Screen::Home);
        assert!(nav.has_saved_state(Screen::Profile));
        assert_eq!(nav.tab_state().scroll, 2);

        nav.navigate_to(Screen::Profile);
        assert!(!nav.has_saved_state(Screen::Profile));
        assert_eq!(nav.tab_state().scroll, 5);
    }

    #[test]
    fn test_back_discards_left_tab_state() {
        let mut nav = on_home();
        nav.navigate_to(Screen::Profile);
        nav.tab_state_mut().scroll = 4;
        nav.go_back();
        assert!(!nav.has_saved_state(Screen::Profile));
        nav.navigate_to(Screen::Profile);
        assert_eq!(nav.tab_state(), TabState::default());
    }

    #[test]
    fn test_presentation_follows_state() {
        let mut nav = NavigationController::new(Locale::En);
        let p = nav.presentation();
        assert!(!p.show_top_bar);
        assert!(!p.show_bottom_bar);
        assert_eq!(p.selected_tab, None);

        nav.complete_splash();
        let p = nav.presentation();
        assert!(p.show_top_bar);
        assert!(!p.show_back_button);
        assert!(p.show_bottom_bar);
        assert_eq!(p.selected_tab, Some(Screen::Home));
        assert_eq!(p.title, "Home");

        nav.navigate_to(Screen::Profile);
        let p = nav.presentation();
        assert!(p.show_back_button);
        assert_eq!(p.selected_tab, Some(Screen::Profile));
        assert_eq!(p.title, "Profile");
    }

    #[test]
    fn test_changes_published_only_on_mutation() {
        let mut nav = NavigationController::new(Locale::En);
        let mut rx = nav.subscribe();
        assert!(!rx.has_changed().unwrap());

        nav.complete_splash();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().current, Screen::Home);

        nav.navigate_to(Screen::Home);
        nav.go_back();
        nav.tab_state_mut().scroll_down(3, 10);
        assert!(!rx.has_changed().unwrap());

        nav.navigate_to(Screen::Profile);
        let snap = rx.borrow_and_update().clone();
        assert_eq!(snap.current, Screen::Profile);
        assert_eq!(snap.back_stack, vec![Screen::Home]);
        assert_eq!(snap.revision, 2);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = TabState::default();
        state.scroll_up(3);
        assert_eq!(state.scroll, 0);
        state.scroll_down(10, 4);
        assert_eq!(state.scroll, 4);
    }
}
