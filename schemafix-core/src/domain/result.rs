//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid rewrite pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid filename pattern: {0}")]
    FilePattern(#[from] globset::Error),
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
