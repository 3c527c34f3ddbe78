//! The code generation primitive interface.

use alloc::vec::Vec;

use crate::{
    handle::{BlockHandle, MethodHandle, TypeHandle},
    operand::Operand,
};

/// The primitives a code generation backend exposes to the builder.
///
/// Every method takes `&self`: the builder holds many method and block
/// values at once, all borrowing the same backend. A backend that records
/// state uses interior mutability, and provides any serialization it needs.
pub trait Backend {
    /// Failure reported by the backend. The builder passes it through as is.
    type Error;

    /// Map a primitive type descriptor to a handle. Infallible for the
    /// fixed descriptors the builder uses.
    fn resolve_type(&self, signed: bool, width: u32) -> TypeHandle;

    /// Register a new method in the program under construction.
    fn declare_method(
        &self,
        name: &str,
        return_type: TypeHandle,
        params: &[TypeHandle],
    ) -> Result<MethodHandle, Self::Error>;

    /// Register a new basic block inside an existing method.
    fn declare_block(&self, method: MethodHandle, name: &str) -> Result<BlockHandle, Self::Error>;

    /// Append one instruction to a block of a method.
    fn emit(
        &self,
        method: MethodHandle,
        block: BlockHandle,
        mnemonic: &str,
        operands: Vec<Operand>,
    ) -> Result<(), Self::Error>;

    /// Mark the program's entry method.
    fn set_entry_point(&self, method: MethodHandle) -> Result<(), Self::Error>;
}

impl<T: Backend + ?Sized> Backend for &T {
    type Error = T::Error;

    fn resolve_type(&self, signed: bool, width: u32) -> TypeHandle {
        (**self).resolve_type(signed, width)
    }

    fn declare_method(
        &self,
        name: &str,
        return_type: TypeHandle,
        params: &[TypeHandle],
    ) -> Result<MethodHandle, Self::Error> {
        (**self).declare_method(name, return_type, params)
    }

    fn declare_block(&self, method: MethodHandle, name: &str) -> Result<BlockHandle, Self::Error> {
        (**self).declare_block(method, name)
    }

    fn emit(
        &self,
        method: MethodHandle,
        block: BlockHandle,
        mnemonic: &str,
        operands: Vec<Operand>,
    ) -> Result<(), Self::Error> {
        (**self).emit(method, block, mnemonic, operands)
    }

    fn set_entry_point(&self, method: MethodHandle) -> Result<(), Self::Error> {
        (**self).set_entry_point(method)
    }
}
