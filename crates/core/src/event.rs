use crate::state::BatteryInfo;

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Battery monitor task  → `BatteryUpdate`, `BatteryError`
/// - Config watcher task   → `ConfigReloaded`
/// - Terminal input thread → `NextTab`, `PreviousTab`, `Resize`, `Shutdown`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Battery monitor ───────────────────────────────────────────────────────
    /// Fresh readings for every battery, in sysfs name order.
    BatteryUpdate(Vec<BatteryInfo>),
    /// A poll failed; the previous readings stay on screen.
    BatteryError(String),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk; triggers a live reload.
    ConfigReloaded,

    // ── User actions ──────────────────────────────────────────────────────────
    /// Switch to the next battery view.
    NextTab,
    /// Switch to the previous battery view.
    PreviousTab,
    /// Terminal was resized to `(columns, rows)`.
    Resize(u16, u16),

    // ── Internal ──────────────────────────────────────────────────────────────
    /// Graceful shutdown requested.
    Shutdown,
}
