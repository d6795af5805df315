use thiserror::Error;

use pyre_core::error::{ConfigError, ExchangeError};

#[derive(Error, Debug)]
pub enum HostError {
    #[error("match already running")]
    AlreadyRunning,

    #[error("match not started")]
    NotStarted,

    #[error("game loop has shut down")]
    LoopClosed,

    #[error("shared state lock poisoned")]
    LockPoisoned,

    #[error("invalid match configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("result exchange error: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HostError>;
