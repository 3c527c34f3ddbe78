//! Call and entry point targets.

use tinker_ir::{Backend, BlockHandle, MethodHandle};

use crate::{block::Block, method::Method};

/// Something that names a method: the method itself, or one of its blocks.
///
/// Callers sometimes hold the block they were last emitting into rather than
/// the method; a block always stands for the method it was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodTarget {
    Method(MethodHandle),
    Block {
        method: MethodHandle,
        block: BlockHandle,
    },
}

impl MethodTarget {
    /// The method this target resolves to.
    pub fn method_handle(self) -> MethodHandle {
        match self {
            MethodTarget::Method(method) => method,
            MethodTarget::Block { method, .. } => method,
        }
    }
}

impl From<MethodHandle> for MethodTarget {
    fn from(method: MethodHandle) -> Self {
        MethodTarget::Method(method)
    }
}

impl<B: Backend> From<&Method<'_, B>> for MethodTarget {
    fn from(method: &Method<'_, B>) -> Self {
        MethodTarget::Method(method.handle())
    }
}

impl<B: Backend> From<Method<'_, B>> for MethodTarget {
    fn from(method: Method<'_, B>) -> Self {
        MethodTarget::from(&method)
    }
}

impl<B: Backend> From<&Block<'_, B>> for MethodTarget {
    fn from(block: &Block<'_, B>) -> Self {
        MethodTarget::Block {
            method: block.method_handle(),
            block: block.handle(),
        }
    }
}

impl<B: Backend> From<&mut Block<'_, B>> for MethodTarget {
    fn from(block: &mut Block<'_, B>) -> Self {
        MethodTarget::from(&*block)
    }
}

impl<B: Backend> From<Block<'_, B>> for MethodTarget {
    fn from(block: Block<'_, B>) -> Self {
        MethodTarget::from(&block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution() {
        let method = MethodHandle::new(3);
        assert_eq!(MethodTarget::from(method).method_handle(), method);
        assert_eq!(
            MethodTarget::Block {
                method,
                block: BlockHandle::new(1)
            }
            .method_handle(),
            method
        );
    }
}
