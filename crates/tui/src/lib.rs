//! Terminal front-end for `battop`.
//!
//! Owns the terminal and the event loop, and wires together every source of
//! [`Message`]s:
//! - Battery monitor task (sysfs poll every interval)
//! - Config file watcher (live reload on change)
//! - Input thread (keys and resizes)

pub mod app;
pub mod input;
pub mod markup;
pub mod render;
pub mod view;

pub use app::{App, Effect, RunOptions};

use battop_config::{BattopConfig, ConfigWatcher};
use battop_core::{BattopError, Message, Result};
use battop_system::{read_batteries, spawn_monitor};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use tokio::sync::mpsc;
use tracing::info;

type Tui = Terminal<CrosstermBackend<Stdout>>;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run the dashboard until the user quits.
///
/// Fails with [`BattopError::NoBatteries`] before touching the terminal when
/// no battery is present.
pub async fn run(config: BattopConfig, options: RunOptions) -> Result<()> {
    let batteries = read_batteries(&options.sysfs_root)?;
    if batteries.is_empty() {
        return Err(BattopError::NoBatteries);
    }
    info!("Found {} battery(ies)", batteries.len());

    let mut app = App::new(config, options, batteries);
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app).await;

    restore_terminal(&mut terminal)?;
    result
}

async fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    input::spawn_input_thread(input_tx);

    let root = app.options().sysfs_root.clone();
    let mut monitor = spawn_monitor(root.clone(), app.interval());
    let (_watcher, mut reload_rx) = ConfigWatcher::spawn(&app.options().config_path);

    loop {
        terminal
            .draw(|frame| render::render(frame, app))
            .map_err(|e| BattopError::Terminal(e.to_string()))?;

        let msg = tokio::select! {
            Some(msg) = input_rx.recv() => msg,
            Some(msg) = monitor.recv() => msg,
            Some(()) = reload_rx.recv() => Message::ConfigReloaded,
            else => break,
        };

        if let Effect::RestartMonitor(interval) = app.update(msg) {
            monitor = spawn_monitor(root.clone(), interval);
        }
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

// ── Terminal ──────────────────────────────────────────────────────────────────

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(terminal_error(e));
    }
    Terminal::new(CrosstermBackend::new(stdout)).map_err(terminal_error)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;
    Ok(())
}

fn terminal_error(e: io::Error) -> BattopError {
    BattopError::Terminal(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn no_batteries_fails_before_touching_the_terminal() {
        let root = tempfile::tempdir().unwrap();
        let options = RunOptions {
            config_path: root.path().join("battop.toml"),
            sysfs_root: root.path().to_path_buf(),
            interval_override: None,
            units_override: None,
        };
        let err = run(BattopConfig::default(), options).await.unwrap_err();
        assert!(matches!(err, BattopError::NoBatteries));
    }

    #[tokio::test]
    async fn unreadable_sysfs_is_a_battery_error() {
        let options = RunOptions {
            config_path: PathBuf::from("/nonexistent/battop.toml"),
            sysfs_root: PathBuf::from("/nonexistent/power_supply"),
            interval_override: None,
            units_override: None,
        };
        let err = run(BattopConfig::default(), options).await.unwrap_err();
        assert!(matches!(err, BattopError::Battery(_)));
    }
}
