//! Operands carried by an `emit` call.

use alloc::vec::Vec;
use core::fmt;

use crate::handle::{BlockHandle, MethodHandle, TypeHandle};

/// A caller-chosen value slot within a method.
pub type Register = u32;

/// A literal constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Int(i64),
    UInt(u64),
    Bool(bool),
}

impl Constant {
    /// The constant as a wide integer (`true` is 1).
    pub fn as_i128(&self) -> i128 {
        match *self {
            Constant::Int(v) => v as i128,
            Constant::UInt(v) => v as i128,
            Constant::Bool(v) => v as i128,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(v) => write!(f, "{}", v),
            Constant::UInt(v) => write!(f, "{}", v),
            Constant::Bool(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! constant_from {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Constant {
                fn from(value: $ty) -> Self {
                    Constant::$variant(value as $wide)
                }
            }
        )*
    };
}

constant_from!(Int as i64: i8, i16, i32, i64);
constant_from!(UInt as u64: u8, u16, u32, u64);

impl From<bool> for Constant {
    fn from(value: bool) -> Self {
        Constant::Bool(value)
    }
}

/// One opaque value in an instruction's operand list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    /// No value (a void `ret`).
    Absent,
    Register(Register),
    /// A plain index, such as a parameter number.
    Index(u32),
    Type(TypeHandle),
    Const(Constant),
    Method(MethodHandle),
    Block(BlockHandle),
    /// A nested sequence, such as the argument registers of a call.
    List(Vec<Operand>),
}

impl Operand {
    /// Short name of the operand kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Absent => "absent",
            Operand::Register(_) => "register",
            Operand::Index(_) => "index",
            Operand::Type(_) => "type",
            Operand::Const(_) => "constant",
            Operand::Method(_) => "method",
            Operand::Block(_) => "block",
            Operand::List(_) => "list",
        }
    }

    /// Build a list operand from registers.
    pub fn registers(registers: &[Register]) -> Self {
        Operand::List(registers.iter().copied().map(Operand::Register).collect())
    }
}

impl From<Constant> for Operand {
    fn from(value: Constant) -> Self {
        Operand::Const(value)
    }
}

impl From<TypeHandle> for Operand {
    fn from(value: TypeHandle) -> Self {
        Operand::Type(value)
    }
}

impl From<MethodHandle> for Operand {
    fn from(value: MethodHandle) -> Self {
        Operand::Method(value)
    }
}

impl From<BlockHandle> for Operand {
    fn from(value: BlockHandle) -> Self {
        Operand::Block(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Absent => write!(f, "_"),
            Operand::Register(r) => write!(f, "r{}", r),
            Operand::Index(i) => write!(f, "{}", i),
            Operand::Type(t) => write!(f, "{}", t),
            Operand::Const(c) => write!(f, "{}", c),
            Operand::Method(m) => write!(f, "{}", m),
            Operand::Block(b) => write!(f, "{}", b),
            Operand::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
