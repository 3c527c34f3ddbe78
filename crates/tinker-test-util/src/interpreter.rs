//! Reference interpreter for built programs.
//!
//! The instruction set has no branches, so a method runs its first block
//! from top to bottom until a `ret`. Values are `i64`; loads and returns are
//! wrapped to the width of their declared type.

use std::{collections::HashMap, fmt};

use tinker_ir::{Constant, Inst, MethodDef, MethodHandle, Program, Register, TypeHandle};

/// Default limit on nested calls.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Failure while evaluating a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpError {
    NoEntryPoint,
    UnknownMethod(MethodHandle),
    /// The method has no blocks.
    EmptyMethod { method: String },
    ArgumentCount {
        method: String,
        expected: usize,
        found: usize,
    },
    UndefinedRegister { method: String, register: Register },
    /// The entry block ended without a `ret`.
    MissingReturn { method: String },
    CallDepthExceeded { depth: usize },
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpError::NoEntryPoint => write!(f, "program has no entry point"),
            InterpError::UnknownMethod(method) => write!(f, "unknown method {}", method),
            InterpError::EmptyMethod { method } => write!(f, "method '{}' has no blocks", method),
            InterpError::ArgumentCount {
                method,
                expected,
                found,
            } => write!(
                f,
                "method '{}' takes {} arguments, got {}",
                method, expected, found
            ),
            InterpError::UndefinedRegister { method, register } => {
                write!(f, "register r{} read before write in '{}'", register, method)
            }
            InterpError::MissingReturn { method } => {
                write!(f, "method '{}' ended without returning", method)
            }
            InterpError::CallDepthExceeded { depth } => {
                write!(f, "call depth limit of {} exceeded", depth)
            }
        }
    }
}

impl std::error::Error for InterpError {}

/// Evaluates methods of a [`Program`].
#[derive(Debug, Clone)]
pub struct Interpreter<'p> {
    program: &'p Program,
    max_depth: usize,
}

impl<'p> Interpreter<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the limit on nested calls.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Run the program's entry point.
    pub fn run_entry(&self, args: &[i64]) -> Result<Option<i64>, InterpError> {
        let entry = self.program.entry.ok_or(InterpError::NoEntryPoint)?;
        self.run(entry, args)
    }

    /// Run a method. Returns `None` for a void return.
    pub fn run(&self, method: MethodHandle, args: &[i64]) -> Result<Option<i64>, InterpError> {
        self.call(method, args, 0)
    }

    fn call(&self, handle: MethodHandle, args: &[i64], depth: usize) -> Result<Option<i64>, InterpError> {
        if depth > self.max_depth {
            return Err(InterpError::CallDepthExceeded {
                depth: self.max_depth,
            });
        }

        let method = self
            .program
            .method(handle)
            .ok_or(InterpError::UnknownMethod(handle))?;
        if args.len() != method.param_count() {
            return Err(InterpError::ArgumentCount {
                method: method.name.clone(),
                expected: method.param_count(),
                found: args.len(),
            });
        }
        let block = method.entry_block().ok_or_else(|| InterpError::EmptyMethod {
            method: method.name.clone(),
        })?;

        let mut registers: HashMap<Register, i64> = HashMap::new();
        let read = |registers: &HashMap<Register, i64>, register: Register| {
            registers
                .get(&register)
                .copied()
                .ok_or_else(|| InterpError::UndefinedRegister {
                    method: method.name.clone(),
                    register,
                })
        };

        for inst in &block.insts {
            match inst {
                Inst::Add { result, a, b } => {
                    let value = read(&registers, *a)?.wrapping_add(read(&registers, *b)?);
                    registers.insert(*result, value);
                }
                Inst::LoadParam { result, index } => {
                    let value = self.param(method, args, *index)?;
                    registers.insert(*result, value);
                }
                Inst::LoadConst { result, ty, value } => {
                    let raw = match *value {
                        Constant::Int(v) => v,
                        Constant::UInt(v) => v as i64,
                        Constant::Bool(v) => v as i64,
                    };
                    registers.insert(*result, self.normalize(*ty, raw));
                }
                Inst::Call {
                    result,
                    callee,
                    args: arg_registers,
                } => {
                    let call_args = arg_registers
                        .iter()
                        .map(|r| read(&registers, *r))
                        .collect::<Result<Vec<_>, _>>()?;
                    // A void result leaves the register unwritten
                    if let Some(value) = self.call(*callee, &call_args, depth + 1)? {
                        registers.insert(*result, value);
                    }
                }
                Inst::Return { value: Some(r) } => {
                    let value = read(&registers, *r)?;
                    return Ok(Some(self.normalize(method.return_type, value)));
                }
                Inst::Return { value: None } => return Ok(None),
            }
        }

        Err(InterpError::MissingReturn {
            method: method.name.clone(),
        })
    }

    fn param(&self, method: &MethodDef, args: &[i64], index: u32) -> Result<i64, InterpError> {
        let index = index as usize;
        match (args.get(index), method.params.get(index)) {
            (Some(value), Some(ty)) => Ok(self.normalize(*ty, *value)),
            _ => Err(InterpError::ArgumentCount {
                method: method.name.clone(),
                expected: index + 1,
                found: args.len(),
            }),
        }
    }

    fn normalize(&self, ty: TypeHandle, value: i64) -> i64 {
        match self.program.type_def(ty) {
            Some(def) => def.normalize(value),
            None => value,
        }
    }
}
