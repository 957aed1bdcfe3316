//! Contract violations raised by the simulation core

use thiserror::Error;

use crate::sim::Vector;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("actor position {0} is not a finite vector")]
    InvalidPosition(Vector),
    #[error("actor size {0} must be finite and positive on both axes")]
    InvalidSize(Vector),
    #[error("actor speed {0} is not a finite vector")]
    InvalidSpeed(Vector),
    #[error("level contains more than one player (second at {0})")]
    DuplicatePlayer(Vector),
    #[error("no built-in level {number} (levels are numbered 1 to {count})")]
    UnknownLevel { number: usize, count: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("malformed settings: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
}
