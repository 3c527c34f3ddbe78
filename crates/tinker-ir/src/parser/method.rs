//! Method parser.

use alloc::vec::Vec;

use nom::{
    bytes::complete::tag,
    character::complete::char,
    multi::{many0, separated_list0},
    sequence::{delimited, terminated},
    IResult,
};

use super::{
    block::{parse_block, BlockSyntax},
    primitives::{keyword, method_name, type_name},
    whitespace::blank,
};
use crate::types::TypeDef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MethodSyntax<'a> {
    pub name: &'a str,
    pub params: Vec<TypeDef>,
    pub return_type: TypeDef,
    pub blocks: Vec<BlockSyntax<'a>>,
}

/// Parse a parameter list: (i32, i32)
fn parse_params(input: &str) -> IResult<&str, Vec<TypeDef>> {
    delimited(
        terminated(char('('), blank),
        separated_list0(terminated(char(','), blank), terminated(type_name, blank)),
        terminated(char(')'), blank),
    )(input)
}

/// Parse a method: method %name(i32, i32) -> i32 { ... }
pub(crate) fn parse_method(input: &str) -> IResult<&str, MethodSyntax<'_>> {
    let (input, _) = terminated(keyword("method"), blank)(input)?;
    let (input, name) = terminated(method_name, blank)(input)?;
    let (input, params) = parse_params(input)?;
    let (input, _) = terminated(tag("->"), blank)(input)?;
    let (input, return_type) = terminated(type_name, blank)(input)?;
    let (input, _) = terminated(char('{'), blank)(input)?;

    let (input, blocks) = many0(parse_block)(input)?;

    let (input, _) = terminated(char('}'), blank)(input)?;

    Ok((
        input,
        MethodSyntax {
            name,
            params,
            return_type,
            blocks,
        },
    ))
}
