//! Instruction opcodes and their mnemonics.

use core::fmt;

/// An instruction opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `add rResult, rA, rB`
    Add,
    /// `ld_param rResult, paramIndex`
    LdParam,
    /// `ld_const rResult, type, value`
    LdConst,
    /// `call rResult, method, [rParams]`
    Call,
    /// `ret rResult?`
    Ret,
}

impl Opcode {
    pub const ALL: [Opcode; 5] = [
        Opcode::Add,
        Opcode::LdParam,
        Opcode::LdConst,
        Opcode::Call,
        Opcode::Ret,
    ];

    /// The mnemonic passed to the backend's `emit` primitive.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::LdParam => "ld_param",
            Opcode::LdConst => "ld_const",
            Opcode::Call => "call",
            Opcode::Ret => "ret",
        }
    }

    /// Look up an opcode by mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == mnemonic)
    }

    /// Number of operands the opcode takes.
    pub fn operand_count(self) -> usize {
        match self {
            Opcode::Add | Opcode::LdConst | Opcode::Call => 3,
            Opcode::LdParam => 2,
            Opcode::Ret => 1,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
