//! Shared test helpers for integration tests.
//!
//! Provides a WAT guest builder that declares every `std` import, plus
//! runner factory functions used across all integration test files.

#![allow(dead_code)]

use stdhost_hostapi::MemConsole;
use stdhost_runner::{RunError, Runner, RunnerConfig};

/// Every `std` import, bound to `$name` without the leading underscore.
pub const STD_IMPORTS: &str = r#"
    (import "std" "readln" (func $readln (param i32 i32) (result i32)))
    (import "std" "_print" (func $print (param i32 i32)))
    (import "std" "_println" (func $println (param i32 i32)))
    (import "std" "_ln" (func $ln))
    (import "std" "print_int" (func $print_int (param i32)))
    (import "std" "println_int" (func $println_int (param i32)))
    (import "std" "print_real" (func $print_real (param f64)))
    (import "std" "println_real" (func $println_real (param f64)))
    (import "std" "print_int_pad" (func $print_int_pad (param i32 i32)))
    (import "std" "print_real_pad" (func $print_real_pad (param f64 i32)))
"#;

// ── Guest Builders ──

/// Build a guest with one page of memory, `data` segments placed at the
/// given offsets, and `body` as the body of `main` (which has one i32 local
/// `$n`).
pub fn guest(data: &[(u32, &str)], body: &str) -> String {
    let segments: String = data
        .iter()
        .map(|(offset, text)| format!("(data (i32.const {}) \"{}\")\n", offset, text))
        .collect();
    format!(
        "(module\n{STD_IMPORTS}\n(memory (export \"memory\") 1)\n{segments}\
         (func (export \"main\") (local $n i32)\n{body}\n))"
    )
}

/// A guest whose `main` prints `"hello"` with `_println`.
pub fn hello_guest() -> String {
    guest(
        &[(16, "hello")],
        "(call $println (i32.const 16) (i32.const 5))",
    )
}

// ── Runner Loaders ──

/// Compile a WAT guest with the default config.
pub fn load_runner(wat: &str) -> Runner {
    Runner::new(wat.as_bytes(), RunnerConfig::default()).expect("failed to compile guest")
}

/// Run a guest with scripted input and return the console.
pub fn run_guest(wat: &str, input: &[&str]) -> Result<MemConsole, RunError> {
    let runner = Runner::new(wat.as_bytes(), RunnerConfig::default())?;
    runner.run(MemConsole::with_input(input.iter().copied()))
}

/// Run a guest that must succeed and return what it printed.
pub fn run_output(wat: &str, input: &[&str]) -> String {
    match run_guest(wat, input) {
        Ok(mut console) => console.take_output(),
        Err(e) => panic!("guest failed: {}", e),
    }
}
