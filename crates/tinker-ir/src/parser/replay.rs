//! Replaying parsed syntax through a backend.

use alloc::{collections::BTreeMap, string::ToString, vec, vec::Vec};

use super::{block::InstSyntax, program::ProgramSyntax};
use crate::{
    backend::Backend,
    error::ProgramError,
    handle::MethodHandle,
    memory::MemoryBackend,
    opcode::Opcode,
    operand::Operand,
    program::Program,
};

/// Build a program by declaring everything in `syntax` on a fresh
/// `MemoryBackend`, so a parsed program passes the same checks as a built one.
///
/// All methods are declared before any block, so calls may refer to methods
/// that appear later in the text.
pub(crate) fn replay(syntax: &ProgramSyntax<'_>) -> Result<Program, ProgramError> {
    let backend = MemoryBackend::new();

    let mut methods = BTreeMap::new();
    for method in &syntax.methods {
        let return_type = backend.resolve_type(method.return_type.signed, method.return_type.bits);
        let params = method
            .params
            .iter()
            .map(|ty| backend.resolve_type(ty.signed, ty.bits))
            .collect::<Vec<_>>();
        let handle = backend.declare_method(method.name, return_type, &params)?;
        methods.insert(method.name, handle);
    }

    for method in &syntax.methods {
        let handle = lookup(&methods, method.name)?;
        for block in &method.blocks {
            let block_handle = backend.declare_block(handle, block.name)?;
            for inst in &block.insts {
                let (opcode, operands) = lower_inst(&backend, &methods, inst)?;
                backend.emit(handle, block_handle, opcode.mnemonic(), operands)?;
            }
        }
    }

    if let Some(entry) = syntax.entry {
        backend.set_entry_point(lookup(&methods, entry)?)?;
    }

    Ok(backend.into_program())
}

fn lookup(methods: &BTreeMap<&str, MethodHandle>, name: &str) -> Result<MethodHandle, ProgramError> {
    methods
        .get(name)
        .copied()
        .ok_or_else(|| ProgramError::UndefinedMethod {
            name: name.to_string(),
        })
}

fn lower_inst(
    backend: &MemoryBackend,
    methods: &BTreeMap<&str, MethodHandle>,
    inst: &InstSyntax<'_>,
) -> Result<(Opcode, Vec<Operand>), ProgramError> {
    Ok(match inst {
        InstSyntax::Add { result, a, b } => (
            Opcode::Add,
            vec![
                Operand::Register(*result),
                Operand::Register(*a),
                Operand::Register(*b),
            ],
        ),
        InstSyntax::LdParam { result, index } => (
            Opcode::LdParam,
            vec![Operand::Register(*result), Operand::Index(*index)],
        ),
        InstSyntax::LdConst { result, ty, value } => (
            Opcode::LdConst,
            vec![
                Operand::Register(*result),
                Operand::Type(backend.resolve_type(ty.signed, ty.bits)),
                Operand::Const(*value),
            ],
        ),
        InstSyntax::Call {
            result,
            callee,
            args,
        } => (
            Opcode::Call,
            vec![
                Operand::Register(*result),
                Operand::Method(lookup(methods, callee)?),
                Operand::registers(args),
            ],
        ),
        InstSyntax::Ret(value) => (
            Opcode::Ret,
            vec![value.map_or(Operand::Absent, Operand::Register)],
        ),
    })
}
