//! Guest module validation: host ABI checks.
//!
//! Two checks bracket instantiation:
//!
//! 1. Before: every import is a function from the `std` namespace whose name
//!    and signature match the host function table.
//! 2. After: the instance exports a memory and a zero-parameter entry point
//!    under the configured names.

use wasmtime::{AsContextMut, ExternType, Func, FuncType, Instance, Memory, Module, ValType};

use crate::config::RunnerConfig;
use crate::error::RunError;
use crate::linker::{find_host_function, WasmType, HOST_NAMESPACE};

fn matches_type(actual: &ValType, expected: WasmType) -> bool {
    match expected {
        WasmType::I32 => matches!(actual, ValType::I32),
        WasmType::F64 => matches!(actual, ValType::F64),
    }
}

fn signature_matches(ty: &FuncType, params: &[WasmType], results: &[WasmType]) -> bool {
    let actual_params: Vec<ValType> = ty.params().collect();
    let actual_results: Vec<ValType> = ty.results().collect();
    actual_params.len() == params.len()
        && actual_results.len() == results.len()
        && actual_params
            .iter()
            .zip(params)
            .all(|(a, e)| matches_type(a, *e))
        && actual_results
            .iter()
            .zip(results)
            .all(|(a, e)| matches_type(a, *e))
}

/// Check that all imports resolve to `std` host functions.
pub fn validate_imports(module: &Module) -> Result<(), RunError> {
    for import in module.imports() {
        let module_name = import.module();
        let name = import.name();

        if module_name != HOST_NAMESPACE {
            return Err(RunError::Validation(format!(
                "import from unknown module '{}' (only '{}' allowed): {}",
                module_name, HOST_NAMESPACE, name
            )));
        }

        let func_ty = match import.ty() {
            ExternType::Func(ft) => ft,
            _ => {
                return Err(RunError::Validation(format!(
                    "non-function import not allowed: {}::{}",
                    module_name, name
                )));
            }
        };

        let host_fn = find_host_function(name).ok_or_else(|| {
            RunError::Validation(format!("unknown host function: {}::{}", module_name, name))
        })?;

        if !signature_matches(&func_ty, host_fn.params, host_fn.results) {
            return Err(RunError::Validation(format!(
                "import '{}::{}' has wrong signature: expected {:?} -> {:?}",
                module_name, name, host_fn.params, host_fn.results
            )));
        }
    }

    Ok(())
}

/// Resolve the memory and entry point exports on an instance.
pub fn resolve_exports(
    instance: &Instance,
    mut store: impl AsContextMut,
    config: &RunnerConfig,
) -> Result<(Memory, Func), RunError> {
    let memory = instance
        .get_memory(&mut store, &config.memory_export)
        .ok_or_else(|| RunError::MissingExport(format!("memory '{}'", config.memory_export)))?;

    let entry = instance
        .get_func(&mut store, &config.entry_point)
        .ok_or_else(|| {
            RunError::MissingExport(format!("{} function", config.entry_point))
        })?;

    let params = entry.ty(&store).params().len();
    if params != 0 {
        return Err(RunError::Validation(format!(
            "export '{}' must take no parameters, takes {}",
            config.entry_point, params
        )));
    }

    Ok((memory, entry))
}
