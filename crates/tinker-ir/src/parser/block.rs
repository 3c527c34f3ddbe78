//! Block and instruction parsers.

use alloc::vec::Vec;

use nom::{
    branch::alt,
    character::complete::{char, space0, space1},
    combinator::{map, not, opt},
    error::{Error, ErrorKind},
    multi::{many0, separated_list0},
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};

use super::{
    primitives::{comma, identifier, index, keyword, literal, method_name, register, type_name},
    whitespace::blank,
};
use crate::{
    operand::{Constant, Register},
    types::TypeDef,
};

/// An instruction as written, with method references still by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InstSyntax<'a> {
    Add {
        result: Register,
        a: Register,
        b: Register,
    },
    LdParam {
        result: Register,
        index: u32,
    },
    LdConst {
        result: Register,
        ty: TypeDef,
        value: Constant,
    },
    Call {
        result: Register,
        callee: &'a str,
        args: Vec<Register>,
    },
    Ret(Option<Register>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BlockSyntax<'a> {
    pub name: &'a str,
    pub insts: Vec<InstSyntax<'a>>,
}

/// Parse `ret` or `ret r2`. The value must be on the same line.
fn parse_ret(input: &str) -> IResult<&str, InstSyntax<'_>> {
    let (input, _) = keyword("ret")(input)?;
    // `ret:` is a block label, not an instruction
    let (input, _) = not(preceded(space0, char(':')))(input)?;
    let (input, value) = opt(preceded(space1, register))(input)?;
    Ok((input, InstSyntax::Ret(value)))
}

/// Parse `rN = <op> <operands>`
fn parse_assign(input: &str) -> IResult<&str, InstSyntax<'_>> {
    let (input, result) = terminated(register, space0)(input)?;
    let (input, _) = terminated(char('='), space0)(input)?;
    let (rest, op) = terminated(identifier, space1)(input)?;

    match op {
        "add" => map(
            tuple((register, comma, register)),
            move |(a, _, b)| InstSyntax::Add { result, a, b },
        )(rest),
        "ld_param" => map(index, move |index| InstSyntax::LdParam { result, index })(rest),
        "ld_const" => map(
            tuple((terminated(type_name, space1), literal)),
            move |(ty, value)| InstSyntax::LdConst { result, ty, value },
        )(rest),
        "call" => map(
            tuple((
                terminated(method_name, space0),
                delimited(
                    terminated(char('('), space0),
                    separated_list0(comma, register),
                    preceded(space0, char(')')),
                ),
            )),
            move |(callee, args)| InstSyntax::Call {
                result,
                callee,
                args,
            },
        )(rest),
        _ => Err(nom::Err::Error(Error::new(input, ErrorKind::Tag))),
    }
}

/// Parse a single instruction
pub(crate) fn parse_instruction(input: &str) -> IResult<&str, InstSyntax<'_>> {
    alt((parse_ret, parse_assign))(input)
}

/// Parse a block: a label followed by its instructions
pub(crate) fn parse_block(input: &str) -> IResult<&str, BlockSyntax<'_>> {
    let (input, name) = terminated(identifier, space0)(input)?;
    let (input, _) = terminated(char(':'), blank)(input)?;

    // many0 stops at the next label or the closing brace
    let (input, insts) = many0(terminated(parse_instruction, blank))(input)?;

    Ok((input, BlockSyntax { name, insts }))
}
