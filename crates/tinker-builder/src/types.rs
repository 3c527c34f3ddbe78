//! The primitive type catalogue.

use tinker_ir::{Backend, TypeHandle};

/// Handles for the primitive value types, resolved once per context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Types {
    pub bool: TypeHandle,
    pub i8: TypeHandle,
    pub i16: TypeHandle,
    pub i32: TypeHandle,
    pub i64: TypeHandle,
    pub u8: TypeHandle,
    pub u16: TypeHandle,
    pub u32: TypeHandle,
    pub u64: TypeHandle,
}

impl Types {
    /// Resolve every catalogue type through the backend, one call each.
    pub fn resolve<B: Backend + ?Sized>(backend: &B) -> Self {
        Self {
            bool: backend.resolve_type(false, 1),
            i8: backend.resolve_type(true, 8),
            i16: backend.resolve_type(true, 16),
            i32: backend.resolve_type(true, 32),
            i64: backend.resolve_type(true, 64),
            u8: backend.resolve_type(false, 8),
            u16: backend.resolve_type(false, 16),
            u32: backend.resolve_type(false, 32),
            u64: backend.resolve_type(false, 64),
        }
    }

    /// All catalogue entries with their names, in declaration order.
    pub fn all(&self) -> [(&'static str, TypeHandle); 9] {
        [
            ("bool", self.bool),
            ("i8", self.i8),
            ("i16", self.i16),
            ("i32", self.i32),
            ("i64", self.i64),
            ("u8", self.u8),
            ("u16", self.u16),
            ("u32", self.u32),
            ("u64", self.u64),
        ]
    }
}

#[cfg(test)]
mod tests {
    use tinker_ir::{MemoryBackend, TypeDef};

    use super::*;

    #[test]
    fn test_resolve_distinct_handles() {
        let backend = MemoryBackend::new();
        let types = Types::resolve(&backend);
        let all = types.all();
        for (i, (_, a)) in all.iter().enumerate() {
            for (_, b) in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_resolve_descriptors() {
        let backend = MemoryBackend::new();
        let types = Types::resolve(&backend);
        let program = backend.into_program();
        assert_eq!(program.type_def(types.bool), Some(&TypeDef::BOOL));
        assert_eq!(program.type_def(types.i16), Some(&TypeDef::new(true, 16)));
        assert_eq!(program.type_def(types.u64), Some(&TypeDef::new(false, 64)));
        for (name, handle) in types.all() {
            let printed = program.type_def(handle).map(|t| alloc::format!("{}", t));
            assert_eq!(printed.as_deref(), Some(name));
        }
    }
}
