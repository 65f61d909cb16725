//! The fixed set of screens and their metadata.
//!
//! Routes are the stable string keys for each screen. Titles depend on the
//! configured locale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Home,
    Profile,
}

/// Screens shown as bottom-bar items, in display order.
pub const TABS: [Screen; 2] = [Screen::Home, Screen::Profile];

/// Destination that tab switches pop back to.
pub const START_DESTINATION: Screen = Screen::Home;

/// Language used for screen titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Full metadata for a screen as handed to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    pub id: Screen,
    pub route: &'static str,
    pub title: &'static str,
    pub is_tabbed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route: {0:?}")]
pub struct UnknownRoute(pub String);

impl Screen {
    pub fn route(self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::Home => "home",
            Screen::Profile => "profile",
        }
    }

    pub fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Screen::Splash, Locale::Ru) => "Загрузка",
            (Screen::Home, Locale::Ru) => "Главная",
            (Screen::Profile, Locale::Ru) => "Профиль",
            (Screen::Splash, Locale::En) => "Loading",
            (Screen::Home, Locale::En) => "Home",
            (Screen::Profile, Locale::En) => "Profile",
        }
    }

    pub fn is_tabbed(self) -> bool {
        !matches!(self, Screen::Splash)
    }

    pub fn info(self, locale: Locale) -> ScreenInfo {
        ScreenInfo {
            id: self,
            route: self.route(),
            title: self.title(locale),
            is_tabbed: self.is_tabbed(),
        }
    }

    /// Look a screen up by its route key. Unknown routes are an error, never
    /// a fallback to some default screen.
    pub fn from_route(route: &str) -> Result<Self, UnknownRoute> {
        match route {
            "splash" => Ok(Screen::Splash),
            "home" => Ok(Screen::Home),
            "profile" => Ok(Screen::Profile),
            other => Err(UnknownRoute(other.to_string())),
        }
    }

    /// Bottom-bar glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Screen::Splash => "◌",
            Screen::Home => "⌂",
            Screen::Profile => "☺",
        }
    }
}

impl FromStr for Screen {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::from_route(s)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}
