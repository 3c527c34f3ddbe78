//! Parser for the textual program form.
//!
//! Parsing happens in two steps: the text is parsed into a syntax tree that
//! still refers to methods and types by name, which is then replayed through
//! a [`MemoryBackend`](crate::MemoryBackend). Backend rejections (a call with
//! the wrong number of arguments, a duplicate block label, ...) are reported
//! as parse errors.

mod block;
mod error;
mod method;
mod primitives;
mod program;
mod replay;
mod whitespace;

use alloc::format;

use error::parse_error;
pub use error::ParseError;
use program::parse_program_syntax;

use crate::program::Program;

/// Parse a complete program from its textual form.
pub fn parse_program(input: &str) -> Result<Program, ParseError> {
    let syntax = match parse_program_syntax(input) {
        Ok(("", syntax)) => syntax,
        Ok((remaining, _)) => {
            let line = remaining.lines().next().unwrap_or_default();
            return Err(parse_error(
                input,
                remaining,
                &format!("Unexpected input remaining: {}", line),
            ));
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let line = e.input.lines().next().unwrap_or_default();
            return Err(parse_error(
                input,
                e.input,
                &format!("Unexpected input: {}", line),
            ));
        }
        Err(nom::Err::Incomplete(_)) => {
            return Err(parse_error(input, "", "Unexpected end of input"));
        }
    };

    Ok(replay::replay(&syntax)?)
}
