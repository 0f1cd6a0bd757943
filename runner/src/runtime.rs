//! Runner: Wasmtime engine, module loading, and entry point execution.
//!
//! The `Runner` struct is the main entry point. It compiles a guest module,
//! checks its imports, and provides `run` for executing it once against a
//! console.
//!
//! Run lifecycle:
//! 1. Build a `Store` holding a fresh `HostState`
//! 2. Link the `std` host functions and instantiate
//! 3. Resolve `memory` and `main` on the instance
//! 4. Publish the memory into the host state
//! 5. Call `main`

use std::path::Path;

use tracing::{debug, info};
use wasmtime::{Config, Engine, Linker, Module, Store, Val, WasmBacktraceDetails};

use stdhost_hostapi::HostConsole;

use crate::config::RunnerConfig;
use crate::error::{classify_guest_error, classify_instantiation_error, RunError};
use crate::host_impl::HostState;
use crate::linker::register_host_functions;
use crate::validation::{resolve_exports, validate_imports};

/// A compiled guest module ready to run.
pub struct Runner {
    engine: Engine,
    module: Module,
    config: RunnerConfig,
}

impl Runner {
    /// Compile a runner from module bytes (binary or text format).
    ///
    /// Checks the module's imports before accepting unless the config
    /// disables it.
    pub fn new(wasm_bytes: &[u8], config: RunnerConfig) -> Result<Self, RunError> {
        let engine = create_engine()?;
        debug!(bytes = wasm_bytes.len(), "compiling module");
        let module = Module::new(&engine, wasm_bytes).map_err(RunError::Compile)?;
        if config.check_imports {
            validate_imports(&module)?;
        }
        Ok(Self {
            engine,
            module,
            config,
        })
    }

    /// Read the whole file at `path` and compile it.
    pub fn from_file(path: &Path, config: RunnerConfig) -> Result<Self, RunError> {
        debug!(path = %path.display(), "reading module");
        let bytes = std::fs::read(path).map_err(|source| RunError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(&bytes, config)
    }

    /// Instantiate the module and run its entry point to completion.
    ///
    /// The console is moved into the instance's host state for the duration
    /// of the run and handed back on success.
    pub fn run<C>(&self, console: C) -> Result<C, RunError>
    where
        C: HostConsole + 'static,
    {
        let mut store = Store::new(&self.engine, HostState::new(console));

        let mut linker = Linker::new(&self.engine);
        register_host_functions(&mut linker)?;

        debug!("instantiating module");
        let instance = linker
            .instantiate(&mut store, &self.module)
            .map_err(classify_instantiation_error)?;

        let (memory, entry) = resolve_exports(&instance, &mut store, &self.config)?;

        store
            .data()
            .publish_memory(memory)
            .map_err(|_| RunError::Validation("guest memory already published".into()))?;
        debug!(pages = memory.size(&store), "published guest memory");

        let mut results = vec![Val::I32(0); entry.ty(&store).results().len()];

        info!(entry = %self.config.entry_point, "running guest");
        entry
            .call(&mut store, &[], &mut results)
            .map_err(classify_guest_error)?;
        info!("guest finished");

        Ok(store.into_data().into_console())
    }
}

/// Create the Wasmtime engine.
fn create_engine() -> Result<Engine, RunError> {
    let mut wasm_config = Config::new();

    // Trap messages name wasm frames when WASMTIME_BACKTRACE_DETAILS=1.
    wasm_config.wasm_backtrace_details(WasmBacktraceDetails::Environment);

    Engine::new(&wasm_config).map_err(RunError::Compile)
}
