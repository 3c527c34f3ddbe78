//! Whitespace and comment parsing utilities.

use nom::{
    branch::alt,
    character::complete::{char, multispace1, not_line_ending},
    combinator::{map, recognize},
    multi::many0,
    sequence::pair,
    IResult,
};

/// Parse a `;` comment up to the end of the line
pub(crate) fn comment(input: &str) -> IResult<&str, &str> {
    recognize(pair(char(';'), not_line_ending))(input)
}

/// Parse whitespace (spaces, tabs, newlines) and comments - returns the matched string
pub(crate) fn blank_space(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((multispace1, comment))))(input)
}

/// Parse whitespace and comments and discard result - returns ()
/// This is the main whitespace parser to use throughout
pub(crate) fn blank(input: &str) -> IResult<&str, ()> {
    map(blank_space, |_| ())(input)
}
