//! Parse error types.

use alloc::string::{String, ToString};
use core::fmt;

use crate::error::ProgramError;

/// Parse error with position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// Byte offset into the input. Errors found while replaying a
    /// syntactically valid program through the backend report 0.
    pub position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at position {}: {}",
            self.position, self.message
        )
    }
}

impl core::error::Error for ParseError {}

impl From<ProgramError> for ParseError {
    fn from(err: ProgramError) -> Self {
        ParseError {
            message: err.to_string(),
            position: 0,
        }
    }
}

pub(crate) fn parse_error(original_input: &str, remaining_input: &str, message: &str) -> ParseError {
    ParseError {
        message: message.to_string(),
        position: original_input.len() - remaining_input.len(),
    }
}
