//! Runner error types.

use std::path::PathBuf;

use stdhost_hostapi::HostError;

/// The three ways a run can fail. All of them end the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The command line was incomplete.
    Usage,
    /// The module could not be read, compiled, linked, or lacks a required
    /// export.
    Load,
    /// The entry point, or a host function it called, failed.
    Execution,
}

/// Top-level error type for the runner crate.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Missing or malformed command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// The module file could not be read.
    #[error("cannot read module {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wasmtime engine creation or module compilation failed.
    #[error("compile error: {0:#}")]
    Compile(anyhow::Error),

    /// Module failed the host ABI checks (imports or export shapes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Instantiation failed.
    #[error("link error: {0:#}")]
    Link(anyhow::Error),

    /// A required export is absent from the instance.
    #[error("wasm program does not export {0}")]
    MissingExport(String),

    /// A host function rejected a guest call.
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// The guest trapped.
    #[error("guest trapped: {0}")]
    Trap(String),

    /// Any other failure while the entry point was running.
    #[error("execution error: {0}")]
    Execution(String),
}

impl RunError {
    /// Classify the error into one of the three fatal kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) => ErrorKind::Usage,
            Self::Read { .. }
            | Self::Compile(_)
            | Self::Validation(_)
            | Self::Link(_)
            | Self::MissingExport(_) => ErrorKind::Load,
            Self::Host(_) | Self::Trap(_) | Self::Execution(_) => ErrorKind::Execution,
        }
    }
}

/// Convert an error raised by a guest call into a `RunError`.
///
/// Host functions report failures as `HostError`, which Wasmtime carries
/// through the trap; those are recovered first. Engine traps come next, and
/// anything else is reported verbatim.
pub(crate) fn classify_guest_error(err: anyhow::Error) -> RunError {
    if let Some(host) = err.downcast_ref::<HostError>() {
        return RunError::Host(host.clone());
    }
    match err.downcast_ref::<wasmtime::Trap>() {
        Some(trap) => RunError::Trap(trap.to_string()),
        None => RunError::Execution(format!("{:#}", err)),
    }
}

/// Convert an instantiation failure into a `RunError`.
///
/// A wasm start function can call host functions or trap, so those are
/// classified like guest errors; everything else is a link failure.
pub(crate) fn classify_instantiation_error(err: anyhow::Error) -> RunError {
    if err.is::<HostError>() || err.is::<wasmtime::Trap>() {
        classify_guest_error(err)
    } else {
        RunError::Link(err)
    }
}
