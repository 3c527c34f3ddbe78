//! Basic blocks.

use alloc::{string::String, vec::Vec};

use crate::inst::Inst;

/// A basic block in a method.
///
/// A named, append-only sequence of instructions. Whether the block ends in
/// a return is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDef {
    /// Block label, unique within its method.
    pub name: String,
    /// Instructions in emission order.
    pub insts: Vec<Inst>,
}

impl BlockDef {
    /// Create a new empty block.
    pub fn new(name: String) -> Self {
        Self {
            name,
            insts: Vec::new(),
        }
    }

    /// Add an instruction to this block.
    pub fn push_inst(&mut self, inst: Inst) {
        self.insts.push(inst);
    }

    /// Get the number of instructions in this block.
    pub fn inst_count(&self) -> usize {
        self.insts.len()
    }

    /// Check whether the last instruction is a return.
    pub fn is_terminated(&self) -> bool {
        matches!(self.insts.last(), Some(Inst::Return { .. }))
    }
}
