//! CLI entry point for the opstep binary.

pub mod commands;
pub mod formatter;
pub mod repl;

use std::path::PathBuf;

use bytes::Bytes;
use clap::Parser;

use crate::config::{DebuggerConfig, load_config, parse_hex_bytes};
use crate::engine::DebugEngine;
use crate::error::DebuggerError;
use crate::types::SessionSummary;

/// Time-travel debugger for EVM-style bytecode.
#[derive(Parser, Debug)]
#[command(name = "opstep", about = "Time-travel debugger for EVM-style bytecode")]
pub struct Args {
    /// Hex-encoded bytecode (with or without 0x prefix)
    #[arg(long, conflicts_with = "code_file", required_unless_present = "code_file")]
    pub code: Option<String>,

    /// File containing hex-encoded bytecode
    #[arg(long, value_name = "PATH")]
    pub code_file: Option<PathBuf>,

    /// Hex-encoded call data [default: a2e62045]
    #[arg(long)]
    pub calldata: Option<String>,

    /// Call value as a hex quantity [default: 0]
    #[arg(long)]
    pub callvalue: Option<String>,

    /// Initial gas allowance [default: 15000000]
    #[arg(long)]
    pub gas_limit: Option<u64>,

    /// TOML config file with a [debugger] table
    #[arg(long, value_name = "PATH", env = "OPSTEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable BEGINSUB, JUMPSUB and RETURNSUB
    #[arg(long)]
    pub subroutines: bool,

    /// Disassembly rows to show [default: 10]
    #[arg(long)]
    pub height: Option<usize>,
}

/// Run the debugger CLI until the operator quits.
pub fn run(args: Args) -> Result<SessionSummary, DebuggerError> {
    let config = merge_cli_overrides(load_config(args.config.as_deref())?, &args);
    config.validate().map_err(DebuggerError::Config)?;

    let code = load_code(&args)?;
    let engine = DebugEngine::from_config(code, &config)?;

    println!(
        "Loaded {} bytes of code, gas limit {}.\n",
        engine.program().len(),
        engine.env().gas_limit
    );

    repl::start(engine, &config)
}

/// Merge CLI overrides into a loaded (or default) config.
///
/// CLI flags take precedence over TOML values.
pub fn merge_cli_overrides(mut config: DebuggerConfig, args: &Args) -> DebuggerConfig {
    if let Some(calldata) = &args.calldata {
        config.call_data = calldata.clone();
    }
    if let Some(callvalue) = &args.callvalue {
        config.call_value = callvalue.clone();
    }
    if let Some(gas_limit) = args.gas_limit {
        config.gas_limit = gas_limit;
    }
    if let Some(height) = args.height {
        config.viewport_height = height;
    }
    if args.subroutines {
        config.subroutines = true;
    }
    config
}

fn load_code(args: &Args) -> Result<Bytes, DebuggerError> {
    let text = match (&args.code, &args.code_file) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            return Err(DebuggerError::Cli(
                "one of --code or --code-file is required".to_string(),
            ));
        }
    };
    parse_hex_bytes(&text).map_err(|e| DebuggerError::InvalidBytecode(e.to_string()))
}
