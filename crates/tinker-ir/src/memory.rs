//! Reference backend that records a `Program` in memory.

use alloc::{string::ToString, vec::Vec};
use core::cell::RefCell;

use crate::{
    backend::Backend,
    error::ProgramError,
    handle::{BlockHandle, MethodHandle, TypeHandle},
    inst::Inst,
    method::MethodDef,
    operand::{Constant, Operand},
    program::Program,
    types::TypeDef,
};

/// A backend that builds a [`Program`] and checks every declaration and
/// instruction against what has been declared so far.
///
/// Rejected calls leave the program unchanged.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    program: RefCell<Program>,
}

impl MemoryBackend {
    /// Create a backend with an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone the program built so far.
    pub fn snapshot(&self) -> Program {
        self.program.borrow().clone()
    }

    /// Inspect the program built so far.
    pub fn with_program<R>(&self, f: impl FnOnce(&Program) -> R) -> R {
        f(&self.program.borrow())
    }

    /// Finish and return the program.
    pub fn into_program(self) -> Program {
        self.program.into_inner()
    }
}

impl Backend for MemoryBackend {
    type Error = ProgramError;

    fn resolve_type(&self, signed: bool, width: u32) -> TypeHandle {
        let ty = TypeDef::new(signed, width);
        let handle = self.program.borrow_mut().intern_type(ty);
        debug!("resolve_type {} -> {}", ty, handle);
        handle
    }

    fn declare_method(
        &self,
        name: &str,
        return_type: TypeHandle,
        params: &[TypeHandle],
    ) -> Result<MethodHandle, ProgramError> {
        let mut program = self.program.borrow_mut();

        check_name(name)?;
        if program.method_by_name(name).is_some() {
            return Err(ProgramError::DuplicateMethod {
                name: name.to_string(),
            });
        }
        for ty in core::iter::once(&return_type).chain(params) {
            if program.type_def(*ty).is_none() {
                return Err(ProgramError::UnknownType(*ty));
            }
        }

        let handle = program.add_method(MethodDef::new(
            name.to_string(),
            return_type,
            params.to_vec(),
        ));
        debug!("declare_method {} -> {}", name, handle);
        Ok(handle)
    }

    fn declare_block(&self, method: MethodHandle, name: &str) -> Result<BlockHandle, ProgramError> {
        let mut program = self.program.borrow_mut();

        check_name(name)?;
        let method_def = program
            .method_mut(method)
            .ok_or(ProgramError::UnknownMethod(method))?;
        if method_def.block_by_name(name).is_some() {
            return Err(ProgramError::DuplicateBlock {
                method: method_def.name.clone(),
                name: name.to_string(),
            });
        }

        let handle = method_def.add_block(name.to_string());
        debug!("declare_block {}.{} -> {}", method_def.name, name, handle);
        Ok(handle)
    }

    fn emit(
        &self,
        method: MethodHandle,
        block: BlockHandle,
        mnemonic: &str,
        operands: Vec<Operand>,
    ) -> Result<(), ProgramError> {
        let mut program = self.program.borrow_mut();

        let method_def = program
            .method(method)
            .ok_or(ProgramError::UnknownMethod(method))?;
        if method_def.block(block).is_none() {
            return Err(ProgramError::UnknownBlock {
                method: method_def.name.clone(),
                block,
            });
        }

        let inst = Inst::decode(mnemonic, &operands)?;
        check_inst(&program, method_def, &inst)?;
        debug!("emit {}.{}: {:?}", method_def.name, block, inst);

        if let Some(block_def) = program
            .method_mut(method)
            .and_then(|m| m.block_mut(block))
        {
            block_def.push_inst(inst);
        }
        Ok(())
    }

    fn set_entry_point(&self, method: MethodHandle) -> Result<(), ProgramError> {
        let mut program = self.program.borrow_mut();

        let requested = program
            .method(method)
            .ok_or(ProgramError::UnknownMethod(method))?;
        match program.entry {
            Some(current) if current != method => {
                let current = program
                    .method(current)
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| current.to_string());
                return Err(ProgramError::EntryPointAlreadySet {
                    current,
                    requested: requested.name.clone(),
                });
            }
            _ => {}
        }

        debug!("set_entry_point {}", requested.name);
        program.entry = Some(method);
        Ok(())
    }
}

/// Names must be identifiers: `[A-Za-z_][A-Za-z0-9_.]*`.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(is_identifier_char)
}

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

fn check_name(name: &str) -> Result<(), ProgramError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(ProgramError::InvalidName {
            name: name.to_string(),
        })
    }
}

fn check_inst(program: &Program, method: &MethodDef, inst: &Inst) -> Result<(), ProgramError> {
    match inst {
        Inst::LoadParam { index, .. } => {
            if *index as usize >= method.param_count() {
                return Err(ProgramError::ParamOutOfRange {
                    method: method.name.clone(),
                    index: *index,
                    count: method.param_count(),
                });
            }
        }
        Inst::LoadConst { ty, value, .. } => {
            let ty = *program.type_def(*ty).ok_or(ProgramError::UnknownType(*ty))?;
            let fits = match value {
                Constant::Bool(_) => ty.is_bool(),
                _ => ty.contains(value.as_i128()),
            };
            if !fits {
                return Err(ProgramError::ConstantOutOfRange { ty, value: *value });
            }
        }
        Inst::Call { callee, args, .. } => {
            let callee_def = program
                .method(*callee)
                .ok_or(ProgramError::UnknownMethod(*callee))?;
            if args.len() != callee_def.param_count() {
                return Err(ProgramError::ArityMismatch {
                    callee: callee_def.name.clone(),
                    expected: callee_def.param_count(),
                    found: args.len(),
                });
            }
        }
        Inst::Add { .. } | Inst::Return { .. } => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};

    use super::*;

    fn backend_with_add2() -> (MemoryBackend, MethodHandle, BlockHandle, TypeHandle) {
        let backend = MemoryBackend::new();
        let i32 = backend.resolve_type(true, 32);
        let method = backend.declare_method("add2", i32, &[i32, i32]).unwrap();
        let block = backend.declare_block(method, "entry").unwrap();
        (backend, method, block, i32)
    }

    #[test]
    fn test_resolve_type_interns() {
        let backend = MemoryBackend::new();
        let a = backend.resolve_type(true, 32);
        let b = backend.resolve_type(false, 32);
        assert_ne!(a, b);
        assert_eq!(backend.resolve_type(true, 32), a);
    }

    #[test]
    fn test_emit_records_instructions() {
        let (backend, method, block, _) = backend_with_add2();
        backend
            .emit(method, block, "ld_param", vec![Operand::Register(0), Operand::Index(0)])
            .unwrap();
        backend
            .emit(method, block, "ld_param", vec![Operand::Register(1), Operand::Index(1)])
            .unwrap();
        backend
            .emit(
                method,
                block,
                "add",
                vec![
                    Operand::Register(2),
                    Operand::Register(0),
                    Operand::Register(1),
                ],
            )
            .unwrap();
        backend
            .emit(method, block, "ret", vec![Operand::Register(2)])
            .unwrap();

        let program = backend.into_program();
        let entry = program.method(method).and_then(|m| m.block(block)).unwrap();
        assert_eq!(entry.inst_count(), 4);
        assert_eq!(entry.insts[2], Inst::Add { result: 2, a: 0, b: 1 });
        assert!(entry.is_terminated());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let (backend, method, _, i32) = backend_with_add2();
        assert_eq!(
            backend.declare_method("add2", i32, &[]),
            Err(ProgramError::DuplicateMethod {
                name: String::from("add2")
            })
        );
        assert_eq!(
            backend.declare_block(method, "entry"),
            Err(ProgramError::DuplicateBlock {
                method: String::from("add2"),
                name: String::from("entry")
            })
        );
    }

    #[test]
    fn test_block_names_scoped_to_method() {
        let (backend, _, _, i32) = backend_with_add2();
        let other = backend.declare_method("other", i32, &[]).unwrap();
        let block = backend.declare_block(other, "entry").unwrap();
        assert_eq!(block, BlockHandle::new(0));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let backend = MemoryBackend::new();
        let i32 = backend.resolve_type(true, 32);
        for name in ["", "9lives", "has space", "%main"] {
            assert!(matches!(
                backend.declare_method(name, i32, &[]),
                Err(ProgramError::InvalidName { .. })
            ));
        }
        assert!(backend.declare_method("ns.main_2", i32, &[]).is_ok());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let backend = MemoryBackend::new();
        let i32 = backend.resolve_type(true, 32);
        assert_eq!(
            backend.declare_method("f", i32, &[TypeHandle::new(7)]),
            Err(ProgramError::UnknownType(TypeHandle::new(7)))
        );
    }

    #[test]
    fn test_param_out_of_range() {
        let (backend, method, block, _) = backend_with_add2();
        let err = backend
            .emit(method, block, "ld_param", vec![Operand::Register(0), Operand::Index(2)])
            .unwrap_err();
        assert_eq!(
            err,
            ProgramError::ParamOutOfRange {
                method: String::from("add2"),
                index: 2,
                count: 2
            }
        );
        assert_eq!(backend.snapshot().methods[0].blocks[0].inst_count(), 0);
    }

    #[test]
    fn test_constant_range_checked() {
        let (backend, method, block, _) = backend_with_add2();
        let u8 = backend.resolve_type(false, 8);
        let boolean = backend.resolve_type(false, 1);

        let ld = |ty, value: Constant| {
            backend.emit(
                method,
                block,
                "ld_const",
                vec![Operand::Register(0), Operand::Type(ty), Operand::Const(value)],
            )
        };

        assert!(ld(u8, Constant::Int(255)).is_ok());
        assert!(ld(u8, Constant::Int(256)).is_err());
        assert!(ld(u8, Constant::Int(-1)).is_err());
        assert!(ld(boolean, Constant::Bool(true)).is_ok());
        assert!(ld(boolean, Constant::Int(1)).is_ok());
        assert!(ld(u8, Constant::Bool(true)).is_err());
    }

    #[test]
    fn test_call_checks_target_and_arity() {
        let (backend, method, block, _) = backend_with_add2();
        let call = |callee, args: &[u32]| {
            backend.emit(
                method,
                block,
                "call",
                vec![
                    Operand::Register(5),
                    Operand::Method(callee),
                    Operand::registers(args),
                ],
            )
        };

        assert!(call(method, &[0, 1]).is_ok());
        assert_eq!(
            call(method, &[0]),
            Err(ProgramError::ArityMismatch {
                callee: String::from("add2"),
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            call(MethodHandle::new(4), &[]),
            Err(ProgramError::UnknownMethod(MethodHandle::new(4)))
        );
    }

    #[test]
    fn test_unknown_block_rejected() {
        let (backend, method, _, _) = backend_with_add2();
        let err = backend
            .emit(method, BlockHandle::new(3), "ret", vec![Operand::Absent])
            .unwrap_err();
        assert!(matches!(err, ProgramError::UnknownBlock { .. }));
    }

    #[test]
    fn test_single_entry_point() {
        let (backend, method, _, i32) = backend_with_add2();
        let other = backend.declare_method("other", i32, &[]).unwrap();

        assert!(backend.set_entry_point(method).is_ok());
        assert!(backend.set_entry_point(method).is_ok());
        assert_eq!(
            backend.set_entry_point(other),
            Err(ProgramError::EntryPointAlreadySet {
                current: String::from("add2"),
                requested: String::from("other")
            })
        );
        assert_eq!(backend.snapshot().entry, Some(method));
    }
}
