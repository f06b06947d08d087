pub mod error;
pub mod event;
pub mod logging;
pub mod state;

pub use error::{BattopError, Result};
pub use event::Message;
pub use state::{BatteryInfo, BatteryState};
