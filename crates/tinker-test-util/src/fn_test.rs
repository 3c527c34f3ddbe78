//! Test builder for Tinker programs.

use tinker_ir::{MethodHandle, Program};

use crate::{
    filecheck::match_filecheck,
    interpreter::{InterpError, Interpreter},
};

enum Expectation {
    /// Expect the method to return this value
    Return(i64),
    /// Expect a bare `ret`
    Void,
    /// Expect evaluation to fail with an error containing this text
    Error(String),
    /// Expect the printed program to match these filecheck directives
    Ir(String),
}

impl Expectation {
    fn check(&self, program: &Program, result: &Result<Option<i64>, InterpError>) -> Result<(), String> {
        match self {
            Expectation::Return(expected) => match result {
                Ok(Some(actual)) if actual == expected => Ok(()),
                Ok(Some(actual)) => Err(format!("Expected return value {}, got {}", expected, actual)),
                Ok(None) => Err(format!(
                    "Expected return value {}, but method returned no value",
                    expected
                )),
                Err(e) => Err(format!("Expected return value {}, got error: {}", expected, e)),
            },
            Expectation::Void => match result {
                Ok(None) => Ok(()),
                Ok(Some(actual)) => Err(format!("Expected no return value, got {}", actual)),
                Err(e) => Err(format!("Expected no return value, got error: {}", e)),
            },
            Expectation::Error(message) => match result {
                Err(e) if e.to_string().contains(message.as_str()) => Ok(()),
                Err(e) => Err(format!(
                    "Expected error containing '{}', got '{}'",
                    message, e
                )),
                Ok(value) => Err(format!(
                    "Expected error containing '{}', got {:?}",
                    message, value
                )),
            },
            Expectation::Ir(directives) => match_filecheck(&program.to_string(), directives),
        }
    }
}

/// Builder for running a method of a [`Program`] through the interpreter.
///
/// Without [`method`](Self::method), the program's entry point runs.
pub struct TinkerFnTest {
    program: Program,
    method: Option<String>,
    args: Vec<i64>,
    max_depth: Option<usize>,
    expectations: Vec<Expectation>,
    debug_enabled: bool,
}

impl TinkerFnTest {
    /// Create a new test for the given program.
    pub fn new(program: Program) -> Self {
        Self {
            program,
            method: None,
            args: Vec::new(),
            max_depth: None,
            expectations: Vec::new(),
            debug_enabled: false,
        }
    }

    /// Print the program even when every expectation holds.
    pub fn debug(mut self, enable: bool) -> Self {
        self.debug_enabled = enable;
        self
    }

    /// Run the named method instead of the entry point.
    pub fn method(mut self, name: &str) -> Self {
        self.method = Some(name.to_string());
        self
    }

    pub fn with_args(mut self, args: &[i64]) -> Self {
        self.args = args.to_vec();
        self
    }

    /// Limit nested calls.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn expect_return(mut self, value: i64) -> Self {
        self.expectations.push(Expectation::Return(value));
        self
    }

    pub fn expect_void(mut self) -> Self {
        self.expectations.push(Expectation::Void);
        self
    }

    /// Expect evaluation to fail with an error whose message contains
    /// `message`.
    pub fn expect_error(mut self, message: impl Into<String>) -> Self {
        self.expectations.push(Expectation::Error(message.into()));
        self
    }

    /// Expect the printed program to match filecheck directives.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// TinkerFnTest::new(program)
    ///     .expect_ir("check: method %add2(i32, i32) -> i32\ncheck: ret r2")
    ///     .run();
    /// ```
    pub fn expect_ir(mut self, directives: &str) -> Self {
        self.expectations.push(Expectation::Ir(directives.to_string()));
        self
    }

    /// Run the test and assert all expectations.
    ///
    /// # Panics
    ///
    /// Panics if the named method does not exist or any expectation fails.
    pub fn run(self) {
        let handle = self.resolve_method();

        let mut interp = Interpreter::new(&self.program);
        if let Some(depth) = self.max_depth {
            interp = interp.with_max_depth(depth);
        }
        let result = match handle {
            Some(handle) => interp.run(handle, &self.args),
            None => interp.run_entry(&self.args),
        };

        let failures: Vec<String> = self
            .expectations
            .iter()
            .filter_map(|exp| exp.check(&self.program, &result).err())
            .collect();

        if !failures.is_empty() || self.debug_enabled {
            eprintln!("\n=== Program ===");
            eprintln!("{}", self.program);
            eprintln!("=== Result: {:?} ===", result);
        }

        if let Some(msg) = failures.first() {
            panic!(
                "Test expectation failed: {}\n  Method: {}\n  Arguments: {:?}",
                msg,
                self.method.as_deref().unwrap_or("<entry>"),
                self.args
            );
        }
    }

    fn resolve_method(&self) -> Option<MethodHandle> {
        let name = self.method.as_deref()?;
        match self.program.method_by_name(name) {
            Some(handle) => Some(handle),
            None => panic!("No method named '{}' in program:\n{}", name, self.program),
        }
    }
}

#[cfg(test)]
mod tests {
    use tinker_ir::parse_program;

    use super::*;

    const PROGRAM: &str = "program {
        entry: %add2
        method %add2(i32, i32) -> i32 {
        entry:
            r0 = ld_param 0
            r1 = ld_param 1
            r2 = add r0, r1
            ret r2
        }
        method %noop() -> i32 {
        entry:
            ret
        }
    }";

    #[test]
    fn test_entry_point() {
        TinkerFnTest::new(parse_program(PROGRAM).unwrap())
            .with_args(&[5, 10])
            .expect_return(15)
            .expect_ir("check: entry: %add2\ncheck: r2 = add r0, r1")
            .run();
    }

    #[test]
    fn test_void_and_error() {
        TinkerFnTest::new(parse_program(PROGRAM).unwrap())
            .method("noop")
            .expect_void()
            .run();
        TinkerFnTest::new(parse_program(PROGRAM).unwrap())
            .with_args(&[1])
            .expect_error("takes 2 arguments, got 1")
            .run();
    }

    #[test]
    #[should_panic(expected = "Expected return value 16, got 15")]
    fn test_wrong_return_panics() {
        TinkerFnTest::new(parse_program(PROGRAM).unwrap())
            .with_args(&[5, 10])
            .expect_return(16)
            .run();
    }

    #[test]
    #[should_panic(expected = "No method named 'missing'")]
    fn test_missing_method_panics() {
        TinkerFnTest::new(parse_program(PROGRAM).unwrap())
            .method("missing")
            .run();
    }
}
