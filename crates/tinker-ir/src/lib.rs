//! Tinker Intermediate Representation (IR).
//!
//! This crate defines the boundary between the IR builder and a code
//! generation backend:
//! - Handles (opaque type, method and block identifiers)
//! - Operands and opcodes (the payload of a single `emit` call)
//! - The `Backend` primitive interface
//! - `Program`, a plain record of everything declared, and `MemoryBackend`,
//!   the reference backend that builds one
//! - A textual form for programs and a parser for it

#![no_std]

extern crate alloc;

#[macro_use]
mod debug;

mod backend;
mod block;
mod error;
mod handle;
mod inst;
mod memory;
mod method;
mod opcode;
mod operand;
pub mod parser;
mod program;
mod types;
mod write;

pub use backend::Backend;
pub use block::BlockDef;
pub use error::ProgramError;
pub use handle::{BlockHandle, Handle, MethodHandle, TypeHandle};
pub use inst::Inst;
pub use memory::MemoryBackend;
pub use method::MethodDef;
pub use opcode::Opcode;
pub use operand::{Constant, Operand, Register};
pub use parser::{parse_program, ParseError};
pub use program::Program;
pub use types::TypeDef;
