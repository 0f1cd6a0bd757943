//! Runner configuration.

/// Configuration for loading and running a guest module.
///
/// The defaults are the fixed guest contract: a memory exported as
/// `memory`, an entry point exported as `main`, and imports restricted to
/// the host's `std` functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Name of the guest's linear memory export.
    pub memory_export: String,

    /// Name of the zero-argument entry point export.
    pub entry_point: String,

    /// Check the module's imports against the host function table before
    /// instantiating. When disabled, unresolved imports surface as the
    /// engine's own instantiation error.
    pub check_imports: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            memory_export: "memory".to_owned(),
            entry_point: "main".to_owned(),
            check_imports: true,
        }
    }
}
