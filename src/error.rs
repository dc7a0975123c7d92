// Error taxonomy for the fetch-and-report pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RdsTopError {
    /// Bad or missing command-line arguments.
    #[error("{0}")]
    Usage(String),

    #[error("Error creating AWS session: {0}")]
    Session(String),

    #[error("Error getting resource ID: no DB instances found for {0}")]
    InstanceNotFound(String),

    /// Any other control-plane or log-retrieval fault.
    #[error("{context}: {message}")]
    Service { context: &'static str, message: String },

    /// Malformed timestamp or process entry; local to one section or entry.
    #[error("{0}")]
    PayloadParse(String),

    #[error("Error loading config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RdsTopError>;
