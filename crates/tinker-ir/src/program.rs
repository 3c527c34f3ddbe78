//! Programs: everything declared through a backend.

use alloc::vec::Vec;

use crate::{
    handle::{Handle, MethodHandle, TypeHandle},
    method::MethodDef,
    types::TypeDef,
};

/// A program under construction.
///
/// A program is the top-level unit, containing:
/// - The type table (indexed by `TypeHandle`)
/// - Methods (indexed by `MethodHandle`, in declaration order)
/// - An optional entry point method
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub types: Vec<TypeDef>,
    pub methods: Vec<MethodDef>,
    pub entry: Option<MethodHandle>,
}

impl Program {
    /// Create a new empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the handle for a type, adding it to the table if needed.
    pub fn intern_type(&mut self, ty: TypeDef) -> TypeHandle {
        if let Some(index) = self.types.iter().position(|t| *t == ty) {
            return TypeHandle::from_index(index);
        }
        self.types.push(ty);
        TypeHandle::from_index(self.types.len() - 1)
    }

    /// Get a type by handle.
    pub fn type_def(&self, handle: TypeHandle) -> Option<&TypeDef> {
        self.types.get(handle.index())
    }

    /// Add a method and return its handle.
    pub fn add_method(&mut self, method: MethodDef) -> MethodHandle {
        self.methods.push(method);
        MethodHandle::from_index(self.methods.len() - 1)
    }

    /// Get a method by handle.
    pub fn method(&self, handle: MethodHandle) -> Option<&MethodDef> {
        self.methods.get(handle.index())
    }

    /// Get a mutable reference to a method by handle.
    pub fn method_mut(&mut self, handle: MethodHandle) -> Option<&mut MethodDef> {
        self.methods.get_mut(handle.index())
    }

    /// Find a method by name.
    pub fn method_by_name(&self, name: &str) -> Option<MethodHandle> {
        self.methods
            .iter()
            .position(|m| m.name == name)
            .map(MethodHandle::from_index)
    }

    /// Iterate over methods with their handles.
    pub fn methods(&self) -> impl Iterator<Item = (MethodHandle, &MethodDef)> {
        self.methods
            .iter()
            .enumerate()
            .map(|(i, m)| (MethodHandle::from_index(i), m))
    }

    /// Get the entry method.
    pub fn entry_method(&self) -> Option<&MethodDef> {
        self.entry.and_then(|handle| self.method(handle))
    }

    /// Get the number of methods in this program.
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;

    #[test]
    fn test_program_creation() {
        let program = Program::new();
        assert_eq!(program.method_count(), 0);
        assert!(program.entry_method().is_none());
    }

    #[test]
    fn test_intern_type() {
        let mut program = Program::new();
        let i32 = program.intern_type(TypeDef::new(true, 32));
        let u32 = program.intern_type(TypeDef::new(false, 32));
        assert_ne!(i32, u32);
        assert_eq!(program.intern_type(TypeDef::new(true, 32)), i32);
        assert_eq!(program.type_def(u32), Some(&TypeDef::new(false, 32)));
        assert_eq!(program.types.len(), 2);
    }

    #[test]
    fn test_program_methods() {
        let mut program = Program::new();
        let i32 = program.intern_type(TypeDef::new(true, 32));
        let main = program.add_method(MethodDef::new("main".to_string(), i32, vec![]));
        let helper = program.add_method(MethodDef::new("helper".to_string(), i32, vec![i32]));

        assert_eq!(program.method_by_name("helper"), Some(helper));
        assert_eq!(program.method_by_name("missing"), None);
        assert_eq!(program.methods().count(), 2);

        program.entry = Some(main);
        assert_eq!(program.entry_method().map(|m| m.name.as_str()), Some("main"));
    }
}
