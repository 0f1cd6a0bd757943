//! Host-side error types for the `std` import bridge.
//!
//! `HostError` is returned by every [`HostApi`](crate::HostApi) method and by
//! the memory window helpers in the runner. A host function that fails hands
//! the error back to Wasmtime, which turns it into a guest trap; the runner
//! recovers the original `HostError` from the trap by downcasting.

/// Host-side error type returned by `HostApi` methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The guest passed a window `[offset, offset + len)` that does not fit
    /// inside its linear memory of `size` bytes.
    #[error("memory window [{offset}, {offset}+{len}) is out of bounds (memory size {size})")]
    OutOfBounds {
        /// Start of the requested window.
        offset: u32,
        /// Requested length in bytes.
        len: u32,
        /// Current size of the guest's linear memory.
        size: usize,
    },

    /// A bridge function that needs guest memory ran before the memory
    /// export was published to the host state.
    #[error("guest memory has not been published to the host yet")]
    MemoryUnavailable,

    /// Reading standard input or writing standard output failed.
    #[error("console i/o failed: {0}")]
    Io(String),
}

impl HostError {
    /// Create an out-of-bounds error for the given window.
    pub fn out_of_bounds(offset: u32, len: u32, size: usize) -> Self {
        Self::OutOfBounds { offset, len, size }
    }

    /// Returns true for errors caused by a malformed guest call rather than
    /// by the host environment.
    pub fn is_guest_fault(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

impl From<std::io::Error> for HostError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
