//! Method values.

use core::fmt;

use tinker_ir::{Backend, MethodHandle};

use crate::{block::Block, context::Context};

/// A declared method.
pub struct Method<'c, B: Backend> {
    ctx: &'c Context<B>,
    handle: MethodHandle,
}

impl<'c, B: Backend> Method<'c, B> {
    pub(crate) fn new(ctx: &'c Context<B>, handle: MethodHandle) -> Self {
        Self { ctx, handle }
    }

    /// The backend's handle for this method.
    pub fn handle(&self) -> MethodHandle {
        self.handle
    }

    /// Declare a basic block in this method.
    pub fn block(&self, name: &str) -> Result<Block<'c, B>, B::Error> {
        let block = self.ctx.backend().declare_block(self.handle, name)?;
        tinker_ir::debug!("block {}.{} -> {}", self.handle, name, block);
        Ok(Block::new(self.ctx, self.handle, block))
    }
}

// Manual impls: a method is a copyable token whatever the backend is.
impl<B: Backend> Clone for Method<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Backend> Copy for Method<'_, B> {}

impl<B: Backend> fmt::Debug for Method<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("handle", &self.handle)
            .finish()
    }
}
