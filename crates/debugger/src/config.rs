//! TOML-compatible configuration for a debugging session.
//!
//! Every field has a default, so an empty file (or no file) is valid. Call
//! data and call value are kept as hex strings so the file stays readable.
//!
//! ```toml
//! [debugger]
//! gas_limit = 1000000
//! viewport_height = 16
//! call_data = "a2e62045"
//! subroutines = true
//! ```

use std::path::Path;

use bytes::Bytes;
use ethereum_types::U256;
use opstep_vm::{Environment, OpcodeTable, constants::DEFAULT_GAS_LIMIT};
use serde::{Deserialize, Serialize};

use crate::error::DebuggerError;

/// Session settings, loadable from the `[debugger]` table of a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebuggerConfig {
    /// Initial gas allowance (default: 15_000_000).
    pub gas_limit: u64,
    /// Disassembly rows shown around the program counter (default: 10).
    pub viewport_height: usize,
    /// Stack items shown in step summaries (default: 8).
    pub stack_top_capture: usize,
    /// Enable BEGINSUB/JUMPSUB/RETURNSUB (default: false).
    pub subroutines: bool,
    /// Upper bound on steps taken by a single `continue` (default: 1_000_000).
    pub max_continue_steps: usize,
    /// Hex call data, with or without `0x` (default: "a2e62045").
    pub call_data: String,
    /// Hex call value (default: "0").
    pub call_value: String,
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            gas_limit: DEFAULT_GAS_LIMIT,
            viewport_height: 10,
            stack_top_capture: 8,
            subroutines: false,
            max_continue_steps: 1_000_000,
            call_data: "a2e62045".to_string(),
            call_value: "0".to_string(),
        }
    }
}

impl DebuggerConfig {
    /// Validate configuration values, returning an error message on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.gas_limit == 0 {
            return Err("gas_limit must be > 0".to_string());
        }
        if self.viewport_height == 0 {
            return Err("viewport_height must be > 0".to_string());
        }
        if self.max_continue_steps == 0 {
            return Err("max_continue_steps must be > 0".to_string());
        }
        parse_hex_bytes(&self.call_data).map_err(|e| format!("call_data: {e}"))?;
        parse_hex_u256(&self.call_value).map_err(|e| format!("call_value: {e}"))?;
        Ok(())
    }

    /// Session parameters described by this config.
    pub fn environment(&self) -> Result<Environment, DebuggerError> {
        Ok(Environment {
            call_data: parse_hex_bytes(&self.call_data)?,
            call_value: parse_hex_u256(&self.call_value)?,
            gas_limit: self.gas_limit,
            ..Default::default()
        })
    }

    pub fn opcode_table(&self) -> OpcodeTable {
        if self.subroutines {
            OpcodeTable::with_subroutines()
        } else {
            OpcodeTable::reference()
        }
    }
}

/// Load a config from a TOML file.
///
/// If `path` is `None`, returns the default config.
pub fn load_config(path: Option<&Path>) -> Result<DebuggerConfig, DebuggerError> {
    let Some(path) = path else {
        return Ok(DebuggerConfig::default());
    };

    let contents = std::fs::read_to_string(path).map_err(|e| {
        DebuggerError::Config(format!(
            "Failed to read config from {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parse and validate TOML text with an optional `[debugger]` table.
pub fn parse_config(contents: &str) -> Result<DebuggerConfig, DebuggerError> {
    let wrapper: TomlWrapper = toml::from_str(contents)
        .map_err(|e| DebuggerError::Config(format!("Failed to parse TOML config: {e}")))?;

    let config = wrapper.debugger.unwrap_or_default();
    config.validate().map_err(DebuggerError::Config)?;
    Ok(config)
}

/// Wrapper for the top-level TOML structure: `[debugger]` table.
#[derive(Debug, Deserialize)]
struct TomlWrapper {
    debugger: Option<DebuggerConfig>,
}

/// Decode hex with an optional `0x` prefix; surrounding whitespace is ignored.
pub fn parse_hex_bytes(input: &str) -> Result<Bytes, DebuggerError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits)
        .map(Bytes::from)
        .map_err(|e| DebuggerError::InvalidHex(format!("{trimmed:?}: {e}")))
}

/// Parse a hex quantity of at most 32 bytes. Odd digit counts are accepted.
pub fn parse_hex_u256(input: &str) -> Result<U256, DebuggerError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_str_radix(digits, 16)
        .map_err(|e| DebuggerError::InvalidHex(format!("{trimmed:?}: {e}")))
}
