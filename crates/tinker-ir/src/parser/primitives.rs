//! Primitive parsers for names, registers, types and literals.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1, satisfy, space0},
    combinator::{map, map_opt, map_res, not, opt, recognize, value},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

use crate::{
    memory::is_identifier_char,
    operand::{Constant, Register},
    types::TypeDef,
};

/// Parse an identifier: [A-Za-z_][A-Za-z0-9_.]*
pub(crate) fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(is_identifier_char),
    ))(input)
}

/// Parse a keyword that is not the prefix of a longer identifier
pub(crate) fn keyword(kw: &'static str) -> impl FnMut(&str) -> IResult<&str, &str> {
    move |input: &str| terminated(tag(kw), not(satisfy(is_identifier_char)))(input)
}

/// Parse a register (r0, r1, etc.)
pub(crate) fn register(input: &str) -> IResult<&str, Register> {
    terminated(
        map_res(preceded(char('r'), digit1), |s: &str| s.parse::<Register>()),
        not(satisfy(is_identifier_char)),
    )(input)
}

/// Parse a plain unsigned index
pub(crate) fn index(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

/// Parse a method name (%name)
pub(crate) fn method_name(input: &str) -> IResult<&str, &str> {
    preceded(char('%'), identifier)(input)
}

/// Parse a type name (bool, i32, u8, ...)
pub(crate) fn type_name(input: &str) -> IResult<&str, TypeDef> {
    map_opt(identifier, TypeDef::from_name)(input)
}

/// Parse a constant literal (true, false, -5, 42)
///
/// Negative literals become `Constant::Int`; non-negative ones stay
/// `Constant::Int` while they fit an `i64` and become `Constant::UInt` above.
pub(crate) fn literal(input: &str) -> IResult<&str, Constant> {
    alt((
        value(Constant::Bool(true), keyword("true")),
        value(Constant::Bool(false), keyword("false")),
        map_res(recognize(pair(opt(char('-')), digit1)), parse_integer),
    ))(input)
}

fn parse_integer(text: &str) -> Result<Constant, core::num::ParseIntError> {
    if text.starts_with('-') {
        return text.parse::<i64>().map(Constant::Int);
    }
    let value = text.parse::<u64>()?;
    Ok(match i64::try_from(value) {
        Ok(v) => Constant::Int(v),
        Err(_) => Constant::UInt(value),
    })
}

/// Parse a comma separator with optional spaces (no newlines)
pub(crate) fn comma(input: &str) -> IResult<&str, ()> {
    map(tuple((space0, char(','), space0)), |_| ())(input)
}
