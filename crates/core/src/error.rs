use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum BattopError {
    #[error("config error: {0}")]
    Config(String),

    #[error("battery error: {0}")]
    Battery(String),

    #[error("no batteries found on this system")]
    NoBatteries,

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = BattopError> = std::result::Result<T, E>;
