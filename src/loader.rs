use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::errors::export_context;

pub const STDIN_MARKER: &str = "-";

/// Read a dataset document from a file, or from stdin when `source` is `-`.
pub fn load_json(source: &str) -> Result<Value> {
    let json = if source == STDIN_MARKER {
        read_stdin()?
    } else {
        read_file(Path::new(source))?
    };

    let value = parse_json(&json, source)?;
    info!("Loaded dataset document from {}", source);
    Ok(value)
}

/// Write `data` as pretty JSON.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    save_text(path, &json)
}

pub fn save_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| export_context(&parent.display().to_string()))?;
    }
    fs::write(path, text).with_context(|| export_context(&path.display().to_string()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut json = String::new();
    std::io::stdin()
        .read_to_string(&mut json)
        .context("Failed to read dataset from stdin")?;
    Ok(json)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read dataset file {:?}", path))
}

fn parse_json(json: &str, source: &str) -> Result<Value> {
    serde_json::from_str(json).with_context(|| {
        format!(
            "Failed to parse JSON from {}. First 200 chars: {}",
            source,
            json.chars().take(200).collect::<String>()
        )
    })
}
