use anyhow::{Context, Result};
use onebridge_providers::{ConvertOptions, create_converter};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

pub fn handle(
    file: Option<&Path>,
    provider: &str,
    options: ConvertOptions,
    compact: bool,
) -> Result<()> {
    let content = read_input(file)?;
    let raw: Value = serde_json::from_str(&content).context("Input is not valid JSON")?;

    let converter = create_converter(provider, options)?;
    debug!(provider = converter.id(), "converting payload");

    let Some(event) = converter.convert(&raw)? else {
        let event_type = raw
            .pointer("/header/eventType")
            .and_then(Value::as_str)
            .unwrap_or_default();
        warn!(event_type, "unsupported event type, nothing emitted");
        return Ok(());
    };

    let output = if compact {
        serde_json::to_string(&event)?
    } else {
        serde_json::to_string_pretty(&event)?
    };
    println!("{}", output);

    Ok(())
}

/// Read the whole payload from a file, or stdin for `None` / `-`
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
