//! `stdhost-runner`: Wasmtime-based loader for guests that import `std`.
//!
//! This crate loads a compiled guest module, links it against the `std`
//! host functions, and runs its `main` export once. It provides:
//!
//! - **Import checking:** only `std` functions with matching signatures
//! - **Export checking:** a `memory` export and a zero-parameter `main`
//! - **Bounds-checked memory access:** every guest `(offset, len)` goes
//!   through a `MemoryWindow`
//! - **Per-instance host state:** the guest memory is published once into
//!   the store's `HostState`
//!
//! The primary entry point is [`Runner::run`].

pub mod error;
pub mod config;
pub mod memory;
pub mod host_impl;
pub mod validation;
pub mod linker;
pub mod runtime;

pub use error::{ErrorKind, RunError};
pub use config::RunnerConfig;
pub use runtime::Runner;
