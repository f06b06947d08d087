//! Keyboard handling and the terminal input thread.

use battop_core::Message;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// How long the input thread blocks before checking whether the app is gone.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Map a key press to the message it triggers, if any.
pub fn map_key(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::Shutdown)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Message::Shutdown),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Message::NextTab),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Message::PreviousTab),
        _ => None,
    }
}

/// Poll crossterm on a dedicated OS thread and forward mapped events.
///
/// The thread exits once the receiving side of `tx` is dropped or the
/// terminal stops delivering events.
pub fn spawn_input_thread(tx: UnboundedSender<Message>) -> thread::JoinHandle<()> {
    let handle = thread::spawn(move || loop {
        match event::poll(POLL_TIMEOUT) {
            Ok(true) => {
                let msg = match event::read() {
                    Ok(Event::Key(key)) => map_key(key),
                    Ok(Event::Resize(cols, rows)) => Some(Message::Resize(cols, rows)),
                    Ok(_) => None,
                    Err(e) => {
                        warn!("Reading terminal event failed: {e}");
                        break;
                    }
                };
                if let Some(msg) = msg {
                    if tx.send(msg).is_err() {
                        break;
                    }
                }
            }
            Ok(false) if tx.is_closed() => break,
            Ok(false) => {}
            Err(e) => {
                warn!("Polling terminal events failed: {e}");
                break;
            }
        }
    });
    debug!("Input thread started");
    handle
}
