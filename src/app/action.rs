/// Side effects the event loop performs after the handler updates state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Splash was left before its timer fired.
    CancelSplashTimer,
    Quit,
}
