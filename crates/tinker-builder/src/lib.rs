//! Fluent builder for constructing Tinker IR.
//!
//! The builder is a thin layer over a [`Backend`]: every call forwards to
//! exactly one backend primitive and hands back the resulting handle wrapped
//! in a value that knows how to continue.
//!
//! - `Context`: owns the backend and the type catalogue, declares methods
//! - `Method`: declares blocks
//! - `Block`: emits instructions, returning itself for chaining
//! - `MethodTarget`: a method, or a block standing in for its method
//!
//! # Example
//!
//! ```
//! use tinker_builder::Context;
//! use tinker_ir::{MemoryBackend, ProgramError};
//!
//! # fn main() -> Result<(), ProgramError> {
//! let ctx = Context::new(MemoryBackend::new());
//! let t = *ctx.types();
//!
//! let add2 = ctx.method("add2", t.i32, &[t.i32, t.i32])?;
//! add2.block("entry")?
//!     .ld_param(0, 0)?
//!     .ld_param(1, 1)?
//!     .add(2, 0, 1)?
//!     .ret(Some(2))?;
//! ctx.set_main(&add2)?;
//!
//! let program = ctx.into_backend().into_program();
//! assert_eq!(program.entry_method().map(|m| m.name.as_str()), Some("add2"));
//! # Ok(())
//! # }
//! ```
//!
//! The builder performs no checks of its own; whatever the backend rejects
//! comes back unchanged as `B::Error`.

#![no_std]

extern crate alloc;

mod block;
mod context;
mod method;
mod target;
mod types;

pub use block::Block;
pub use context::Context;
pub use method::Method;
pub use target::MethodTarget;
pub use tinker_ir::{Backend, BlockHandle, Constant, MethodHandle, Register, TypeHandle};
pub use types::Types;
