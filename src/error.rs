//! Error types for Ajustar

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Operation not implemented: {0}")]
    Unimplemented(&'static str),

    #[error("Shape mismatch for parameter '{name}': expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
