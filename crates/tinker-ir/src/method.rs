//! Methods.

use alloc::{string::String, vec::Vec};

use crate::{
    block::BlockDef,
    handle::{BlockHandle, Handle, TypeHandle},
};

/// A method in a program.
///
/// A method consists of:
/// - A name, unique within the program
/// - A return type and an ordered list of parameter types
/// - A list of basic blocks; the first one is where execution starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    pub name: String,
    pub return_type: TypeHandle,
    pub params: Vec<TypeHandle>,
    pub blocks: Vec<BlockDef>,
}

impl MethodDef {
    /// Create a new method without blocks.
    pub fn new(name: String, return_type: TypeHandle, params: Vec<TypeHandle>) -> Self {
        Self {
            name,
            return_type,
            params,
            blocks: Vec::new(),
        }
    }

    /// Add a block and return its handle.
    pub fn add_block(&mut self, name: String) -> BlockHandle {
        let handle = BlockHandle::from_index(self.blocks.len());
        self.blocks.push(BlockDef::new(name));
        handle
    }

    /// Get a block by handle.
    pub fn block(&self, handle: BlockHandle) -> Option<&BlockDef> {
        self.blocks.get(handle.index())
    }

    /// Get a mutable reference to a block by handle.
    pub fn block_mut(&mut self, handle: BlockHandle) -> Option<&mut BlockDef> {
        self.blocks.get_mut(handle.index())
    }

    /// Find a block by label.
    pub fn block_by_name(&self, name: &str) -> Option<BlockHandle> {
        self.blocks
            .iter()
            .position(|block| block.name == name)
            .map(BlockHandle::from_index)
    }

    /// Get the entry block (first block), if any.
    pub fn entry_block(&self) -> Option<&BlockDef> {
        self.blocks.first()
    }

    /// Get the number of blocks in this method.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get the number of parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}
