use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Splash delay elapsed
    SplashElapsed,

    /// Tick for UI refresh
    Tick,
}
