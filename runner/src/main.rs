//! `stdhost` binary: run a guest module's `main` against the `std` imports.
//!
//! Exit status is 0 when `main` returns and 1 for any failure: missing
//! argument, unreadable or malformed module, missing export, or an error
//! raised while the guest runs. Diagnostics and logs go to standard error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stdhost_hostapi::StdConsole;
use stdhost_runner::{RunError, Runner, RunnerConfig};

/// Run a WebAssembly program that imports the `std` host functions.
#[derive(Parser)]
#[command(name = "stdhost")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to the module (binary `.wasm` or text `.wat`)
    module: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here, on stdout.
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            if let Err(io) = err.print() {
                eprintln!("error: cannot write usage message: {io}");
                return ExitCode::FAILURE;
            }
            return code;
        }
    };

    init_tracing(cli.verbose);

    match run(cli.module) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "run failed");
            eprintln!("error: {err}");
            if let Some(hint) = diagnostic_hint(&err) {
                eprintln!("note: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(module: Option<PathBuf>) -> Result<(), RunError> {
    let path = module.ok_or_else(|| {
        RunError::Usage("missing first parameter: input file name\n\nUsage: stdhost <MODULE>".into())
    })?;

    let runner = Runner::from_file(&path, RunnerConfig::default())?;
    runner.run(StdConsole::new())?;
    Ok(())
}

/// Extra line pointing at the side that caused a host function failure.
fn diagnostic_hint(err: &RunError) -> Option<&'static str> {
    match err {
        RunError::Host(host) if host.is_guest_fault() => {
            Some("the program passed a memory range outside its linear memory")
        }
        RunError::Host(_) => Some("the host could not serve the call"),
        _ => None,
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
