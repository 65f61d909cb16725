use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tabshell::app::action::Action;
use tabshell::app::event::AppEvent;
use tabshell::app::handler;
use tabshell::app::state::AppState;
use tabshell::navigation::SplashTimer;
use tabshell::{config, logging, ui};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    let _log_guard = logging::init(&cfg.logging)?;
    info!(locale = ?cfg.ui.locale, splash_delay_ms = cfg.ui.splash_delay_ms, "starting");

    // Write defaults on first run so there is a file to edit
    let path = config::config_path();
    if !path.exists() {
        match config::save_config(&cfg) {
            Ok(()) => info!(path = %path.display(), "wrote default config"),
            Err(e) => warn!("could not write default config: {:#}", e),
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!("{:#}", e);
        // Returned, not exited, so the log guard drops and flushes the file.
        return Err(e);
    }

    info!("exited");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg.clone());
    let size = terminal.size()?;
    state.viewport = Rect::new(0, 0, size.width, size.height);
    let mut nav_changes = state.nav.subscribe();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    let tick_rate = cfg.ui.tick_rate();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Splash is current from the start; its timer runs from now
    let mut splash_timer = SplashTimer::schedule(cfg.ui.splash_delay(), event_tx.clone());

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::CancelSplashTimer => splash_timer.cancel(),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Navigation changes force a redraw
        if nav_changes.has_changed().unwrap_or(false) {
            let snapshot = nav_changes.borrow_and_update().clone();
            debug!(
                current = %snapshot.current,
                depth = snapshot.back_stack.len(),
                revision = snapshot.revision,
                "navigation changed"
            );
            state.dirty = true;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
