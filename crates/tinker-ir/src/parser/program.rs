//! Program parser.

use alloc::vec::Vec;

use nom::{
    character::complete::char,
    combinator::opt,
    multi::many0,
    sequence::terminated,
    IResult,
};

use super::{
    method::{parse_method, MethodSyntax},
    primitives::{keyword, method_name},
    whitespace::blank,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProgramSyntax<'a> {
    pub entry: Option<&'a str>,
    pub methods: Vec<MethodSyntax<'a>>,
}

/// Parse an entry declaration: entry: %name
fn parse_entry(input: &str) -> IResult<&str, &str> {
    let (input, _) = terminated(keyword("entry"), blank)(input)?;
    let (input, _) = terminated(char(':'), blank)(input)?;
    terminated(method_name, blank)(input)
}

/// Parse a whole program, including surrounding whitespace
pub(crate) fn parse_program_syntax(input: &str) -> IResult<&str, ProgramSyntax<'_>> {
    let (input, _) = blank(input)?;
    let (input, _) = terminated(keyword("program"), blank)(input)?;
    let (input, _) = terminated(char('{'), blank)(input)?;

    let (input, entry) = opt(parse_entry)(input)?;
    let (input, methods) = many0(parse_method)(input)?;

    let (input, _) = terminated(char('}'), blank)(input)?;

    Ok((input, ProgramSyntax { entry, methods }))
}
