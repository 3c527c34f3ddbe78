//! Block values and instruction emission.

use alloc::{vec, vec::Vec};
use core::fmt;

use tinker_ir::{Backend, BlockHandle, Constant, MethodHandle, Opcode, Operand, Register, TypeHandle};

use crate::{context::Context, target::MethodTarget};

/// A basic block, bound to the method that declared it.
///
/// Each emission method forwards one instruction to the backend and returns
/// the block again, so instructions chain in the order they are written:
///
/// ```ignore
/// entry.ld_param(0, 0)?.ld_param(1, 1)?.add(2, 0, 1)?.ret(Some(2))?;
/// ```
///
/// Registers are caller-chosen numbers. Nothing here checks operand counts,
/// register liveness or whether `ret` comes last; that is up to the backend.
pub struct Block<'c, B: Backend> {
    ctx: &'c Context<B>,
    method: MethodHandle,
    handle: BlockHandle,
}

impl<'c, B: Backend> Block<'c, B> {
    pub(crate) fn new(ctx: &'c Context<B>, method: MethodHandle, handle: BlockHandle) -> Self {
        Self {
            ctx,
            method,
            handle,
        }
    }

    /// The backend's handle for this block.
    pub fn handle(&self) -> BlockHandle {
        self.handle
    }

    /// The handle of the method this block belongs to.
    pub fn method_handle(&self) -> MethodHandle {
        self.method
    }

    /// `result = a + b`
    pub fn add(&mut self, result: Register, a: Register, b: Register) -> Result<&mut Self, B::Error> {
        self.emit(
            Opcode::Add,
            vec![
                Operand::Register(result),
                Operand::Register(a),
                Operand::Register(b),
            ],
        )
    }

    /// Load the method's `index`-th argument into `result`.
    pub fn ld_param(&mut self, result: Register, index: u32) -> Result<&mut Self, B::Error> {
        self.emit(
            Opcode::LdParam,
            vec![Operand::Register(result), Operand::Index(index)],
        )
    }

    /// Load the literal `value` of type `ty` into `result`.
    pub fn ld_const(
        &mut self,
        result: Register,
        ty: TypeHandle,
        value: impl Into<Constant>,
    ) -> Result<&mut Self, B::Error> {
        self.emit(
            Opcode::LdConst,
            vec![
                Operand::Register(result),
                Operand::Type(ty),
                Operand::Const(value.into()),
            ],
        )
    }

    /// Call `target` with the argument registers `params`, storing the
    /// result in `result`. A block target calls the block's method.
    pub fn call(
        &mut self,
        result: Register,
        target: impl Into<MethodTarget>,
        params: &[Register],
    ) -> Result<&mut Self, B::Error> {
        let callee = target.into().method_handle();
        self.emit(
            Opcode::Call,
            vec![
                Operand::Register(result),
                Operand::Method(callee),
                Operand::registers(params),
            ],
        )
    }

    /// Return `result`, or nothing for `None`.
    pub fn ret(&mut self, result: Option<Register>) -> Result<&mut Self, B::Error> {
        let value = match result {
            Some(r) => Operand::Register(r),
            None => Operand::Absent,
        };
        self.emit(Opcode::Ret, vec![value])
    }

    fn emit(&mut self, opcode: Opcode, operands: Vec<Operand>) -> Result<&mut Self, B::Error> {
        tinker_ir::debug!("emit {}.{}: {} {:?}", self.method, self.handle, opcode, operands);
        self.ctx
            .backend()
            .emit(self.method, self.handle, opcode.mnemonic(), operands)?;
        Ok(self)
    }
}

impl<B: Backend> Clone for Block<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Backend> Copy for Block<'_, B> {}

impl<B: Backend> fmt::Debug for Block<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("method", &self.method)
            .field("handle", &self.handle)
            .finish()
    }
}
