//! Error handling for the equipment front-end

use equipamentos_transport::TransportError;
use std::fmt;
use thiserror::Error;

/// Unified error type for the equipment front-end
#[derive(Error, Debug)]
pub enum Error {
    /// The backend call failed or answered with a non-success status
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Required fields were left empty
    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    /// No record with this id in the current collection
    #[error("Equipamento {0} not found")]
    NotFound(i64),

    /// User input that cannot be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new invalid input error
    pub fn invalid_input<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidInput(msg.to_string())
    }

    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
