//! Screen navigation: the screen set, the controller that moves between
//! screens, and the splash auto-advance timer.

pub mod controller;
pub mod screen;
pub mod timer;

pub use controller::{NavSnapshot, NavigationController, Presentation, TabState};
pub use screen::{Locale, Screen, ScreenInfo, UnknownRoute, START_DESTINATION, TABS};
pub use timer::SplashTimer;
