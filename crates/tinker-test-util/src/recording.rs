//! A backend that records the primitive calls it receives.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    fmt,
};

use tinker_ir::{Backend, BlockHandle, Handle, MethodHandle, Operand, TypeHandle};

/// One primitive call, as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ResolveType {
        signed: bool,
        width: u32,
    },
    DeclareMethod {
        name: String,
        return_type: TypeHandle,
        params: Vec<TypeHandle>,
    },
    DeclareBlock {
        method: MethodHandle,
        name: String,
    },
    Emit {
        method: MethodHandle,
        block: BlockHandle,
        mnemonic: String,
        operands: Vec<Operand>,
    },
    SetEntryPoint {
        method: MethodHandle,
    },
}

/// Error returned for a call the backend was told to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected {
    /// Position of the rejected call in the recorded sequence.
    pub call: usize,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "call #{} rejected", self.call)
    }
}

impl std::error::Error for Rejected {}

/// Records every call and hands out fresh handles without checking
/// anything. Type and method handles count up from 0; block handles count
/// up from 0 per method.
///
/// With [`RecordingBackend::reject_call`], the call at a given position is
/// recorded and then fails.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: RefCell<Vec<Call>>,
    next_type: Cell<u32>,
    next_method: Cell<u32>,
    next_block: RefCell<BTreeMap<MethodHandle, u32>>,
    reject: Option<usize>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the call at position `call` (0-based, counting every call).
    /// Type resolution cannot fail, so the position should name a
    /// declaration, an emission or an entry point call.
    pub fn reject_call(mut self, call: usize) -> Self {
        self.reject = Some(call);
        self
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Calls received so far, without type resolution.
    pub fn calls_after_types(&self) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| !matches!(call, Call::ResolveType { .. }))
            .cloned()
            .collect()
    }

    /// Mnemonics of all emitted instructions, in order.
    pub fn mnemonics(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Emit { mnemonic, .. } => Some(mnemonic.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) -> Result<(), Rejected> {
        let mut calls = self.calls.borrow_mut();
        let position = calls.len();
        calls.push(call);
        if self.reject == Some(position) {
            Err(Rejected { call: position })
        } else {
            Ok(())
        }
    }
}

impl Backend for RecordingBackend {
    type Error = Rejected;

    fn resolve_type(&self, signed: bool, width: u32) -> TypeHandle {
        // Infallible: a rejection here is ignored
        let _ = self.record(Call::ResolveType { signed, width });
        let handle = TypeHandle::new(self.next_type.get());
        self.next_type.set(handle.as_u32() + 1);
        handle
    }

    fn declare_method(
        &self,
        name: &str,
        return_type: TypeHandle,
        params: &[TypeHandle],
    ) -> Result<MethodHandle, Rejected> {
        self.record(Call::DeclareMethod {
            name: name.to_string(),
            return_type,
            params: params.to_vec(),
        })?;
        let handle = MethodHandle::new(self.next_method.get());
        self.next_method.set(handle.as_u32() + 1);
        Ok(handle)
    }

    fn declare_block(&self, method: MethodHandle, name: &str) -> Result<BlockHandle, Rejected> {
        self.record(Call::DeclareBlock {
            method,
            name: name.to_string(),
        })?;
        let mut next_block = self.next_block.borrow_mut();
        let next = next_block.entry(method).or_insert(0);
        let handle = BlockHandle::from_index(*next as usize);
        *next += 1;
        Ok(handle)
    }

    fn emit(
        &self,
        method: MethodHandle,
        block: BlockHandle,
        mnemonic: &str,
        operands: Vec<Operand>,
    ) -> Result<(), Rejected> {
        self.record(Call::Emit {
            method,
            block,
            mnemonic: mnemonic.to_string(),
            operands,
        })
    }

    fn set_entry_point(&self, method: MethodHandle) -> Result<(), Rejected> {
        self.record(Call::SetEntryPoint { method })
    }
}
