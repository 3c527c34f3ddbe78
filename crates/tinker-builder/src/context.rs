//! The builder's entry point.

use tinker_ir::{Backend, TypeHandle};

use crate::{method::Method, target::MethodTarget, types::Types};

/// Owns a backend and the type catalogue resolved from it.
///
/// Construct one per program and pass it (or the methods and blocks
/// borrowed from it) to whatever builds IR.
#[derive(Debug)]
pub struct Context<B: Backend> {
    backend: B,
    types: Types,
}

impl<B: Backend> Context<B> {
    /// Create a context, resolving the type catalogue once.
    pub fn new(backend: B) -> Self {
        let types = Types::resolve(&backend);
        Self { backend, types }
    }

    /// The type catalogue.
    pub fn types(&self) -> &Types {
        &self.types
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Finish building and give the backend back.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Declare a method.
    pub fn method(
        &self,
        name: &str,
        return_type: TypeHandle,
        params: &[TypeHandle],
    ) -> Result<Method<'_, B>, B::Error> {
        let handle = self.backend.declare_method(name, return_type, params)?;
        tinker_ir::debug!("method {} -> {}", name, handle);
        Ok(Method::new(self, handle))
    }

    /// Designate the program's entry point.
    pub fn set_main(&self, target: impl Into<MethodTarget>) -> Result<(), B::Error> {
        let method = target.into().method_handle();
        tinker_ir::debug!("set_main {}", method);
        self.backend.set_entry_point(method)
    }
}
