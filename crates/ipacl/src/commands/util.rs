//! Shared helpers for command handlers.

use std::path::Path;

use serde_json::{Map, Value};

use crate::cli::ListInput;
use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_json_file(path: &Path) -> Result<Value, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("invalid JSON: {e}"),
    })
}

/// Read a JSON file that must hold a single object of attributes.
pub fn read_attributes_file(path: &Path) -> Result<Map<String, Value>, CliError> {
    match read_json_file(path)? {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::Validation {
            field: "from-file".into(),
            reason: format!("{} must contain a JSON object", path.display()),
        }),
    }
}

/// Overlay the flags (or file) in `input` onto `attrs`.
///
/// A file replaces the whole map; flags only touch the fields they set.
pub fn apply_input(attrs: &mut Map<String, Value>, input: ListInput) -> Result<(), CliError> {
    if let Some(ref path) = input.from_file {
        *attrs = read_attributes_file(path)?;
        return Ok(());
    }
    if let Some(label) = input.label {
        attrs.insert("label".into(), Value::String(label));
    }
    if let Some(list_type) = input.list_type {
        attrs.insert("list_type".into(), Value::String(list_type));
    }
    if !input.ips.is_empty() {
        attrs.insert(
            "ip_addresses".into(),
            Value::Array(input.ips.into_iter().map(Value::String).collect()),
        );
    }
    if let Some(enabled) = input.enabled {
        attrs.insert("enabled".into(), Value::Bool(enabled));
    }
    Ok(())
}

/// Attributes declared by `input` alone.
pub fn declared_attributes(input: ListInput) -> Result<Map<String, Value>, CliError> {
    let mut attrs = Map::new();
    apply_input(&mut attrs, input)?;
    Ok(attrs)
}
