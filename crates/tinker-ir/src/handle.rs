//! Opaque handles for backend-owned entities.
//!
//! Handles are type-safe indices: a `MethodHandle` can never be passed where a
//! `BlockHandle` is expected, even though both are a `u32` underneath. The
//! builder only threads them through calls; the backend decides what the
//! index means.

use core::fmt;

/// Common behaviour of handle types.
pub trait Handle: Copy + Clone + PartialEq + Eq + core::hash::Hash + fmt::Debug {
    /// Get the index of this handle
    fn index(self) -> usize;

    /// Create a handle from an index
    fn from_index(index: usize) -> Self;
}

macro_rules! handle {
    ($(#[$attr:meta])* $name:ident, $prefix:literal) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Create a handle with the given raw value
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Get the raw value of this handle
            pub const fn as_u32(self) -> u32 {
                self.0
            }
        }

        impl Handle for $name {
            fn index(self) -> usize {
                self.0 as usize
            }

            fn from_index(index: usize) -> Self {
                $name(index as u32)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

handle!(
    /// Handle for a primitive value type (`bool`, `i32`, `u8`, ...).
    TypeHandle,
    "type"
);

handle!(
    /// Handle for a declared method.
    MethodHandle,
    "method"
);

handle!(
    /// Handle for a basic block.
    ///
    /// Block handles are scoped to the method that declared them: the same
    /// raw value names different blocks in different methods.
    BlockHandle,
    "block"
);

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_handle_index_roundtrip() {
        let method = MethodHandle::from_index(5);
        assert_eq!(method.index(), 5);
        assert_eq!(method.as_u32(), 5);
        assert_eq!(MethodHandle::new(5), method);
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(format!("{}", TypeHandle::new(2)), "type2");
        assert_eq!(format!("{}", MethodHandle::new(0)), "method0");
        assert_eq!(format!("{}", BlockHandle::new(7)), "block7");
    }

    #[test]
    fn test_handle_ordering() {
        let b1 = BlockHandle::new(1);
        let b2 = BlockHandle::new(2);
        assert!(b1 < b2);
        assert_eq!(b1, BlockHandle::from_index(1));
    }
}
