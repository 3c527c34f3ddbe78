//! Textual form of programs.
//!
//! ```text
//! program {
//!     entry: %add2
//!
//!     method %add2(i32, i32) -> i32 {
//!     entry:
//!         r0 = ld_param 0
//!         r1 = ld_param 1
//!         r2 = add r0, r1
//!         ret r2
//!     }
//! }
//! ```

use core::fmt;

use crate::{
    handle::{MethodHandle, TypeHandle},
    inst::Inst,
    method::MethodDef,
    program::Program,
};

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "program {{")?;

        if let Some(entry) = self.entry {
            write!(f, "    entry: ")?;
            write_method_name(f, self, entry)?;
            writeln!(f)?;
        }

        for (_, method) in self.methods() {
            writeln!(f)?;
            write_method(f, self, method)?;
        }

        writeln!(f, "}}")
    }
}

fn write_method(f: &mut fmt::Formatter<'_>, program: &Program, method: &MethodDef) -> fmt::Result {
    write!(f, "    method %{}(", method.name)?;
    for (i, param) in method.params.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_type(f, program, *param)?;
    }
    write!(f, ") -> ")?;
    write_type(f, program, method.return_type)?;
    writeln!(f, " {{")?;

    for block in &method.blocks {
        writeln!(f, "    {}:", block.name)?;
        for inst in &block.insts {
            write!(f, "        ")?;
            write_inst(f, program, inst)?;
            writeln!(f)?;
        }
    }

    writeln!(f, "    }}")
}

fn write_inst(f: &mut fmt::Formatter<'_>, program: &Program, inst: &Inst) -> fmt::Result {
    match inst {
        Inst::Add { result, a, b } => write!(f, "r{} = add r{}, r{}", result, a, b),
        Inst::LoadParam { result, index } => write!(f, "r{} = ld_param {}", result, index),
        Inst::LoadConst { result, ty, value } => {
            write!(f, "r{} = ld_const ", result)?;
            write_type(f, program, *ty)?;
            write!(f, " {}", value)
        }
        Inst::Call {
            result,
            callee,
            args,
        } => {
            write!(f, "r{} = call ", result)?;
            write_method_name(f, program, *callee)?;
            write!(f, "(")?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "r{}", arg)?;
            }
            write!(f, ")")
        }
        Inst::Return { value: Some(value) } => write!(f, "ret r{}", value),
        Inst::Return { value: None } => write!(f, "ret"),
    }
}

fn write_type(f: &mut fmt::Formatter<'_>, program: &Program, ty: TypeHandle) -> fmt::Result {
    match program.type_def(ty) {
        Some(def) => write!(f, "{}", def),
        None => write!(f, "{}", ty),
    }
}

fn write_method_name(
    f: &mut fmt::Formatter<'_>,
    program: &Program,
    method: MethodHandle,
) -> fmt::Result {
    match program.method(method) {
        Some(def) => write!(f, "%{}", def.name),
        None => write!(f, "%{}", method),
    }
}
