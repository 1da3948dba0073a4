use anyhow::Result;
use onebridge_providers::{ConvertOptions, create_converter};

pub fn handle(event_type: &str, provider: &str) -> Result<()> {
    let converter = create_converter(provider, ConvertOptions::default())?;

    let Some(spec) = converter.classify(event_type) else {
        anyhow::bail!("Unsupported {} event type: {}", converter.id(), event_type);
    };

    println!("{}", serde_json::to_string_pretty(spec)?);
    Ok(())
}
