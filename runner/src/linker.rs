//! Host function registration via Wasmtime linker.
//!
//! Registers the `std` host functions with the Wasmtime `Linker`.
//! Each function that touches guest memory:
//! 1. Takes the published memory from the `HostState` in the Caller
//! 2. Resolves the guest's `(offset, len)` through a `MemoryWindow`
//! 3. Hands the bounds-checked slice to the `HostApi` implementation
//!
//! Failures are returned as `HostError`, which traps the guest.

use tracing::trace;
use wasmtime::{Caller, Linker};

use stdhost_hostapi::{HostApi, HostConsole};

use crate::error::RunError;
use crate::host_impl::HostState;
use crate::memory::MemoryWindow;

/// Import module name the guest links against.
pub const HOST_NAMESPACE: &str = "std";

/// Wasm value types that appear in the `std` signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasmType {
    I32,
    F64,
}

/// Name and signature of one `std` import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostFunction {
    pub name: &'static str,
    pub params: &'static [WasmType],
    pub results: &'static [WasmType],
}

const fn host_fn(
    name: &'static str,
    params: &'static [WasmType],
    results: &'static [WasmType],
) -> HostFunction {
    HostFunction {
        name,
        params,
        results,
    }
}

use WasmType::{F64, I32};

/// Every function in the `std` namespace. Guests are compiled against these
/// names and parameter orders.
pub const HOST_FUNCTIONS: &[HostFunction] = &[
    host_fn("readln", &[I32, I32], &[I32]),
    host_fn("_print", &[I32, I32], &[]),
    host_fn("_println", &[I32, I32], &[]),
    host_fn("_ln", &[], &[]),
    host_fn("print_int", &[I32], &[]),
    host_fn("println_int", &[I32], &[]),
    host_fn("print_real", &[F64], &[]),
    host_fn("println_real", &[F64], &[]),
    host_fn("print_int_pad", &[I32, I32], &[]),
    host_fn("print_real_pad", &[F64, I32], &[]),
];

/// Look up a `std` function by import name.
pub fn find_host_function(name: &str) -> Option<&'static HostFunction> {
    HOST_FUNCTIONS.iter().find(|f| f.name == name)
}

/// Register all `std` functions with the linker.
pub fn register_host_functions<C>(linker: &mut Linker<HostState<C>>) -> Result<(), RunError>
where
    C: HostConsole + 'static,
{
    register_readln(linker)?;
    register_print(linker)?;
    register_println(linker)?;
    register_ln(linker)?;
    register_ints(linker)?;
    register_reals(linker)?;
    register_padded(linker)?;
    Ok(())
}

// ── Input ──

fn register_readln<C>(linker: &mut Linker<HostState<C>>) -> Result<(), RunError>
where
    C: HostConsole + 'static,
{
    linker
        .func_wrap(
            HOST_NAMESPACE,
            "readln",
            |mut caller: Caller<'_, HostState<C>>, offset: i32, max_len: i32| -> anyhow::Result<i32> {
                trace!(offset, max_len, "std::readln");
                let memory = caller.data().memory()?;
                let (data, state) = memory.data_and_store_mut(&mut caller);

                // Resolve the whole buffer before blocking on input.
                let out = MemoryWindow::from_guest(offset, max_len).slice_mut(data)?;
                let line_len = state.readln(out)?;

                Ok(i32::try_from(line_len).unwrap_or(i32::MAX))
            },
        )
        .map_err(RunError::Link)?;
    Ok(())
}

// ── Text output ──

fn register_print<C>(linker: &mut Linker<HostState<C>>) -> Result<(), RunError>
where
    C: HostConsole + 'static,
{
    linker
        .func_wrap(
            HOST_NAMESPACE,
            "_print",
            |mut caller: Caller<'_, HostState<C>>, offset: i32, len: i32| -> anyhow::Result<()> {
                trace!(offset, len, "std::_print");
                let memory = caller.data().memory()?;
                let (data, state) = memory.data_and_store_mut(&mut caller);
                let bytes = MemoryWindow::from_guest(offset, len).slice(data)?;
                state.print(bytes)?;
                Ok(())
            },
        )
        .map_err(RunError::Link)?;
    Ok(())
}

fn register_println<C>(linker: &mut Linker<HostState<C>>) -> Result<(), RunError>
where
    C: HostConsole + 'static,
{
    linker
        .func_wrap(
            HOST_NAMESPACE,
            "_println",
            |mut caller: Caller<'_, HostState<C>>, offset: i32, len: i32| -> anyhow::Result<()> {
                trace!(offset, len, "std::_println");
                let memory = caller.data().memory()?;
                let (data, state) = memory.data_and_store_mut(&mut caller);
                let bytes = MemoryWindow::from_guest(offset, len).slice(data)?;
                state.println(bytes)?;
                Ok(())
            },
        )
        .map_err(RunError::Link)?;
    Ok(())
}

fn register_ln<C>(linker: &mut Linker<HostState<C>>) -> Result<(), RunError>
where
    C: HostConsole + 'static,
{
    linker
        .func_wrap(
            HOST_NAMESPACE,
            "_ln",
            |mut caller: Caller<'_, HostState<C>>| -> anyhow::Result<()> {
                trace!("std::_ln");
                caller.data_mut().ln()?;
                Ok(())
            },
        )
        .map_err(RunError::Link)?;
    Ok(())
}

// ── Numbers ──

fn register_ints<C>(linker: &mut Linker<HostState<C>>) -> Result<(), RunError>
where
    C: HostConsole + 'static,
{
    linker
        .func_wrap(
            HOST_NAMESPACE,
            "print_int",
            |mut caller: Caller<'_, HostState<C>>, value: i32| -> anyhow::Result<()> {
                trace!(value, "std::print_int");
                caller.data_mut().print_int(value)?;
                Ok(())
            },
        )
        .map_err(RunError::Link)?;
    linker
        .func_wrap(
            HOST_NAMESPACE,
            "println_int",
            |mut caller: Caller<'_, HostState<C>>, value: i32| -> anyhow::Result<()> {
                trace!(value, "std::println_int");
                caller.data_mut().println_int(value)?;
                Ok(())
            },
        )
        .map_err(RunError::Link)?;
    Ok(())
}

fn register_reals<C>(linker: &mut Linker<HostState<C>>) -> Result<(), RunError>
where
    C: HostConsole + 'static,
{
    linker
        .func_wrap(
            HOST_NAMESPACE,
            "print_real",
            |mut caller: Caller<'_, HostState<C>>, value: f64| -> anyhow::Result<()> {
                trace!(value, "std::print_real");
                caller.data_mut().print_real(value)?;
                Ok(())
            },
        )
        .map_err(RunError::Link)?;
    linker
        .func_wrap(
            HOST_NAMESPACE,
            "println_real",
            |mut caller: Caller<'_, HostState<C>>, value: f64| -> anyhow::Result<()> {
                trace!(value, "std::println_real");
                caller.data_mut().println_real(value)?;
                Ok(())
            },
        )
        .map_err(RunError::Link)?;
    Ok(())
}

fn register_padded<C>(linker: &mut Linker<HostState<C>>) -> Result<(), RunError>
where
    C: HostConsole + 'static,
{
    linker
        .func_wrap(
            HOST_NAMESPACE,
            "print_int_pad",
            |mut caller: Caller<'_, HostState<C>>, value: i32, width: i32| -> anyhow::Result<()> {
                trace!(value, width, "std::print_int_pad");
                caller.data_mut().print_int_pad(value, width)?;
                Ok(())
            },
        )
        .map_err(RunError::Link)?;
    linker
        .func_wrap(
            HOST_NAMESPACE,
            "print_real_pad",
            |mut caller: Caller<'_, HostState<C>>, value: f64, width: i32| -> anyhow::Result<()> {
                trace!(value, width, "std::print_real_pad");
                caller.data_mut().print_real_pad(value, width)?;
                Ok(())
            },
        )
        .map_err(RunError::Link)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stdhost_hostapi::MemConsole;
    use wasmtime::Engine;

    #[test]
    fn test_host_function_names_unique() {
        for (i, f) in HOST_FUNCTIONS.iter().enumerate() {
            assert!(
                HOST_FUNCTIONS[i + 1..].iter().all(|g| g.name != f.name),
                "duplicate host function {}",
                f.name
            );
        }
    }

    #[test]
    fn test_find_host_function() {
        let readln = find_host_function("readln").unwrap();
        assert_eq!(readln.params, &[WasmType::I32, WasmType::I32]);
        assert_eq!(readln.results, &[WasmType::I32]);

        let pad = find_host_function("print_real_pad").unwrap();
        assert_eq!(pad.params, &[WasmType::F64, WasmType::I32]);
        assert!(pad.results.is_empty());

        assert!(find_host_function("print").is_none());
    }

    #[test]
    fn test_register_defines_every_table_entry() {
        let engine = Engine::default();
        let mut linker: Linker<HostState<MemConsole>> = Linker::new(&engine);
        register_host_functions(&mut linker).unwrap();

        let mut store = wasmtime::Store::new(&engine, HostState::new(MemConsole::new()));
        for f in HOST_FUNCTIONS {
            assert!(
                linker.get(&mut store, HOST_NAMESPACE, f.name).is_some(),
                "{} not registered",
                f.name
            );
        }
    }

    #[test]
    fn test_register_twice_is_rejected() {
        let engine = Engine::default();
        let mut linker: Linker<HostState<MemConsole>> = Linker::new(&engine);
        register_host_functions(&mut linker).unwrap();
        let err = register_host_functions(&mut linker).unwrap_err();
        assert!(matches!(err, RunError::Link(_)));
    }
}
