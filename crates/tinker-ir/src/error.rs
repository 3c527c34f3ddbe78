//! Errors reported by the reference backend.

use alloc::string::String;
use core::fmt;

use crate::{
    handle::{BlockHandle, MethodHandle, TypeHandle},
    opcode::Opcode,
    operand::Constant,
    types::TypeDef,
};

/// A declaration or instruction rejected by `MemoryBackend`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    /// Method or block name is empty or not an identifier.
    InvalidName { name: String },
    DuplicateMethod { name: String },
    DuplicateBlock { method: String, name: String },
    UnknownType(TypeHandle),
    UnknownMethod(MethodHandle),
    /// A method referenced by name that was never declared.
    UndefinedMethod { name: String },
    UnknownBlock { method: String, block: BlockHandle },
    UnknownMnemonic { mnemonic: String },
    OperandCount {
        opcode: Opcode,
        expected: usize,
        found: usize,
    },
    OperandKind {
        opcode: Opcode,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
    ParamOutOfRange {
        method: String,
        index: u32,
        count: usize,
    },
    ConstantOutOfRange { ty: TypeDef, value: Constant },
    ArityMismatch {
        callee: String,
        expected: usize,
        found: usize,
    },
    EntryPointAlreadySet { current: String, requested: String },
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::InvalidName { name } => write!(f, "invalid name '{}'", name),
            ProgramError::DuplicateMethod { name } => {
                write!(f, "method '{}' already exists", name)
            }
            ProgramError::DuplicateBlock { method, name } => {
                write!(f, "block '{}' already exists in method '{}'", name, method)
            }
            ProgramError::UnknownType(ty) => write!(f, "unknown type {}", ty),
            ProgramError::UnknownMethod(method) => write!(f, "unknown method {}", method),
            ProgramError::UndefinedMethod { name } => {
                write!(f, "method '{}' is not declared", name)
            }
            ProgramError::UnknownBlock { method, block } => {
                write!(f, "unknown block {} in method '{}'", block, method)
            }
            ProgramError::UnknownMnemonic { mnemonic } => {
                write!(f, "unrecognized instruction '{}'", mnemonic)
            }
            ProgramError::OperandCount {
                opcode,
                expected,
                found,
            } => write!(
                f,
                "'{}' takes {} operands, got {}",
                opcode, expected, found
            ),
            ProgramError::OperandKind {
                opcode,
                position,
                expected,
                found,
            } => write!(
                f,
                "'{}' operand {} must be a {}, got a {}",
                opcode, position, expected, found
            ),
            ProgramError::ParamOutOfRange {
                method,
                index,
                count,
            } => write!(
                f,
                "parameter {} out of range for method '{}' with {} parameters",
                index, method, count
            ),
            ProgramError::ConstantOutOfRange { ty, value } => {
                write!(f, "constant {} does not fit type {}", value, ty)
            }
            ProgramError::ArityMismatch {
                callee,
                expected,
                found,
            } => write!(
                f,
                "call to '{}' expects {} arguments, got {}",
                callee, expected, found
            ),
            ProgramError::EntryPointAlreadySet { current, requested } => write!(
                f,
                "entry point already set to '{}', cannot set it to '{}'",
                current, requested
            ),
        }
    }
}

impl core::error::Error for ProgramError {}
