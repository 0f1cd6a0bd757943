//! `stdhost-hostapi`: host API for guests importing the `std` namespace.
//!
//! This crate defines the engine-independent half of the host. It provides:
//!
//! - `HostApi` trait: host-side mirror of the guest's `std` imports
//! - `HostConsole` trait: line input and text output abstraction
//! - `StdConsole`: process standard streams
//! - `MemConsole`: scripted in-memory console for testing
//! - `format`: integer/real formatting and field padding
//! - `HostError`: host-side error type
//!
//! The Wasmtime integration lives in `stdhost-runner`.

pub mod error;
pub mod console;
pub mod std_console;
pub mod mem_console;
pub mod format;
pub mod traits;

// Re-export commonly used types at the crate root.
pub use error::HostError;
pub use console::HostConsole;
pub use std_console::StdConsole;
pub use mem_console::MemConsole;
pub use traits::HostApi;
