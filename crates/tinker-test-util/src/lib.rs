//! Test utilities for the Tinker IR builder.
//!
//! - `RecordingBackend`: a backend that records every primitive call, for
//!   asserting exactly what the builder forwarded
//! - `Interpreter`: evaluates a built `Program`
//! - `TinkerFnTest`: fluent runner combining the two with `filecheck`
//!
//! # Example
//!
//! ```rust
//! use tinker_ir::parse_program;
//! use tinker_test_util::TinkerFnTest;
//!
//! let program = parse_program(
//!     "program {
//!         method %add2(i32, i32) -> i32 {
//!         entry:
//!             r0 = ld_param 0
//!             r1 = ld_param 1
//!             r2 = add r0, r1
//!             ret r2
//!         }
//!     }",
//! )
//! .unwrap();
//!
//! TinkerFnTest::new(program)
//!     .method("add2")
//!     .with_args(&[5, 10])
//!     .expect_return(15)
//!     .run();
//! ```

pub mod filecheck;
mod fn_test;
mod interpreter;
mod recording;

pub use fn_test::TinkerFnTest;
pub use interpreter::{InterpError, Interpreter};
pub use recording::{Call, RecordingBackend, Rejected};
