//! Errors for parsing colors from text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("hex color must have 3, 6, or 8 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}
