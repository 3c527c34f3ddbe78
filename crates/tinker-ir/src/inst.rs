//! Decoded IR instructions.

use alloc::{string::ToString, vec, vec::Vec};

use crate::{
    error::ProgramError,
    handle::{MethodHandle, TypeHandle},
    opcode::Opcode,
    operand::{Constant, Operand, Register},
};

/// An instruction as recorded in a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    /// Integer add: result = a + b
    Add {
        result: Register,
        a: Register,
        b: Register,
    },
    /// Load the `index`-th incoming argument
    LoadParam { result: Register, index: u32 },
    /// Materialize a literal of type `ty`
    LoadConst {
        result: Register,
        ty: TypeHandle,
        value: Constant,
    },
    /// Call `callee` with argument registers `args`
    Call {
        result: Register,
        callee: MethodHandle,
        args: Vec<Register>,
    },
    /// Return, with a value or void
    Return { value: Option<Register> },
}

impl Inst {
    /// Decode a mnemonic and operand list into an instruction.
    ///
    /// Only the shape of the operands is checked here; whether the
    /// referenced types, methods and parameters exist is up to the caller.
    pub fn decode(mnemonic: &str, operands: &[Operand]) -> Result<Inst, ProgramError> {
        let opcode =
            Opcode::from_mnemonic(mnemonic).ok_or_else(|| ProgramError::UnknownMnemonic {
                mnemonic: mnemonic.to_string(),
            })?;

        let expected = opcode.operand_count();
        if operands.len() != expected {
            return Err(ProgramError::OperandCount {
                opcode,
                expected,
                found: operands.len(),
            });
        }

        let inst = match opcode {
            Opcode::Add => Inst::Add {
                result: register(opcode, 0, &operands[0])?,
                a: register(opcode, 1, &operands[1])?,
                b: register(opcode, 2, &operands[2])?,
            },
            Opcode::LdParam => Inst::LoadParam {
                result: register(opcode, 0, &operands[0])?,
                index: match operands[1] {
                    Operand::Index(index) => index,
                    ref other => return Err(kind_error(opcode, 1, "index", other)),
                },
            },
            Opcode::LdConst => Inst::LoadConst {
                result: register(opcode, 0, &operands[0])?,
                ty: match operands[1] {
                    Operand::Type(ty) => ty,
                    ref other => return Err(kind_error(opcode, 1, "type", other)),
                },
                value: match operands[2] {
                    Operand::Const(value) => value,
                    ref other => return Err(kind_error(opcode, 2, "constant", other)),
                },
            },
            Opcode::Call => Inst::Call {
                result: register(opcode, 0, &operands[0])?,
                callee: match operands[1] {
                    Operand::Method(method) => method,
                    ref other => return Err(kind_error(opcode, 1, "method", other)),
                },
                args: match &operands[2] {
                    Operand::List(items) => items
                        .iter()
                        .map(|item| register(opcode, 2, item))
                        .collect::<Result<Vec<_>, _>>()?,
                    other => return Err(kind_error(opcode, 2, "list", other)),
                },
            },
            Opcode::Ret => Inst::Return {
                value: match operands[0] {
                    Operand::Absent => None,
                    Operand::Register(r) => Some(r),
                    ref other => return Err(kind_error(opcode, 0, "register", other)),
                },
            },
        };

        Ok(inst)
    }

    /// Get the opcode of this instruction.
    pub fn opcode(&self) -> Opcode {
        match self {
            Inst::Add { .. } => Opcode::Add,
            Inst::LoadParam { .. } => Opcode::LdParam,
            Inst::LoadConst { .. } => Opcode::LdConst,
            Inst::Call { .. } => Opcode::Call,
            Inst::Return { .. } => Opcode::Ret,
        }
    }

    /// Get the register written by this instruction, if any.
    pub fn result(&self) -> Option<Register> {
        match self {
            Inst::Add { result, .. }
            | Inst::LoadParam { result, .. }
            | Inst::LoadConst { result, .. }
            | Inst::Call { result, .. } => Some(*result),
            Inst::Return { .. } => None,
        }
    }

    /// Get the registers read by this instruction.
    pub fn args(&self) -> Vec<Register> {
        match self {
            Inst::Add { a, b, .. } => vec![*a, *b],
            Inst::LoadParam { .. } | Inst::LoadConst { .. } => Vec::new(),
            Inst::Call { args, .. } => args.clone(),
            Inst::Return { value } => value.iter().copied().collect(),
        }
    }
}

fn register(opcode: Opcode, position: usize, operand: &Operand) -> Result<Register, ProgramError> {
    match operand {
        Operand::Register(r) => Ok(*r),
        other => Err(kind_error(opcode, position, "register", other)),
    }
}

fn kind_error(
    opcode: Opcode,
    position: usize,
    expected: &'static str,
    found: &Operand,
) -> ProgramError {
    ProgramError::OperandKind {
        opcode,
        position,
        expected,
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_add() {
        let inst = Inst::decode(
            "add",
            &[
                Operand::Register(2),
                Operand::Register(0),
                Operand::Register(1),
            ],
        )
        .unwrap();
        assert_eq!(
            inst,
            Inst::Add {
                result: 2,
                a: 0,
                b: 1
            }
        );
        assert_eq!(inst.result(), Some(2));
        assert_eq!(inst.args(), vec![0, 1]);
    }

    #[test]
    fn test_decode_call() {
        let inst = Inst::decode(
            "call",
            &[
                Operand::Register(4),
                Operand::Method(MethodHandle::new(1)),
                Operand::registers(&[2, 3]),
            ],
        )
        .unwrap();
        assert_eq!(
            inst,
            Inst::Call {
                result: 4,
                callee: MethodHandle::new(1),
                args: vec![2, 3],
            }
        );
        assert_eq!(inst.opcode(), Opcode::Call);
    }

    #[test]
    fn test_decode_void_return() {
        let inst = Inst::decode("ret", &[Operand::Absent]).unwrap();
        assert_eq!(inst, Inst::Return { value: None });
        assert_eq!(inst.result(), None);
        assert!(inst.args().is_empty());
    }

    #[test]
    fn test_decode_unknown_mnemonic() {
        let err = Inst::decode("mul", &[]).unwrap_err();
        assert_eq!(
            err,
            ProgramError::UnknownMnemonic {
                mnemonic: "mul".to_string()
            }
        );
    }

    #[test]
    fn test_decode_wrong_count() {
        let err = Inst::decode("ld_param", &[Operand::Register(0)]).unwrap_err();
        assert_eq!(
            err,
            ProgramError::OperandCount {
                opcode: Opcode::LdParam,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_decode_wrong_kind() {
        let err = Inst::decode(
            "ld_const",
            &[
                Operand::Register(0),
                Operand::Register(1),
                Operand::Const(Constant::Int(3)),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ProgramError::OperandKind {
                opcode: Opcode::LdConst,
                position: 1,
                expected: "type",
                found: "register"
            }
        );

        // Call arguments must all be registers
        let err = Inst::decode(
            "call",
            &[
                Operand::Register(0),
                Operand::Method(MethodHandle::new(0)),
                Operand::List(vec![Operand::Index(1)]),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ProgramError::OperandKind { position: 2, .. }
        ));
    }
}
