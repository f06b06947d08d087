pub mod battery;

pub use battery::{read_batteries, DEFAULT_SYSFS_ROOT};

use battop_core::Message;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;

/// Spawn a background Tokio task that reads every battery under `root` each
/// `interval` and forwards the result as a [`Message`].
///
/// The first poll happens one `interval` after the call, since callers take
/// the initial reading themselves. Read failures are logged and sent as
/// `Message::BatteryError`; the task keeps polling. It stops when the
/// receiver is dropped.
pub fn spawn_monitor(root: PathBuf, interval: Duration) -> mpsc::Receiver<Message> {
    let (tx, rx) = mpsc::channel(4);

    tokio::spawn(async move {
        let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let msg = match read_batteries(&root) {
                Ok(batteries) if batteries.is_empty() => {
                    tracing::warn!("No batteries under '{}'", root.display());
                    Message::BatteryError("no batteries found".to_string())
                }
                Ok(batteries) => Message::BatteryUpdate(batteries),
                Err(e) => {
                    tracing::warn!("Battery poll failed: {e}");
                    Message::BatteryError(e.to_string())
                }
            };

            if tx.send(msg).await.is_err() {
                break; // all receivers dropped
            }
        }
    });

    rx
}
