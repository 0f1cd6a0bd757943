//! Per-instance host state held in the Wasmtime Store.
//!
//! `HostState` is the context every `std` host function reaches through its
//! `Caller`. It owns the console and the guest's memory handle. The memory
//! starts out unpublished, is published exactly once after the runner has
//! resolved the required exports, and is read-only from then on.

use std::cell::OnceCell;

use wasmtime::Memory;

use stdhost_hostapi::{HostApi, HostConsole, HostError};

/// Per-instance state held in the Wasmtime `Store`.
///
/// One `HostState` belongs to exactly one instance; running a second module
/// means building a second store with its own state.
pub struct HostState<C> {
    /// Console the bridge reads lines from and writes text to.
    pub console: C,
    /// Guest linear memory, set once after instantiation.
    memory: OnceCell<Memory>,
}

impl<C: HostConsole> HostState<C> {
    /// Create host state around a console. Memory is not yet published.
    pub fn new(console: C) -> Self {
        Self {
            console,
            memory: OnceCell::new(),
        }
    }

    /// Publish the instance's memory. Fails if memory was already published.
    pub fn publish_memory(&self, memory: Memory) -> Result<(), Memory> {
        self.memory.set(memory)
    }

    /// The published guest memory.
    pub fn memory(&self) -> Result<Memory, HostError> {
        self.memory
            .get()
            .copied()
            .ok_or(HostError::MemoryUnavailable)
    }

    /// Consume the state, handing back the console.
    pub fn into_console(self) -> C {
        self.console
    }
}

impl<C: HostConsole> HostApi for HostState<C> {
    type Console = C;

    fn console(&mut self) -> &mut C {
        &mut self.console
    }
}
