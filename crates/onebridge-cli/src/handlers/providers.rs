use anyhow::Result;
use onebridge_providers::{ConvertOptions, create_converter, get_all_providers};

pub fn list(show_events: bool) -> Result<()> {
    println!("{:<12} {:<12} {:<8} DESCRIPTION", "PROVIDER", "PLATFORM", "EVENTS");
    println!("{}", "-".repeat(60));

    for provider in get_all_providers() {
        let converter = create_converter(provider.name, ConvertOptions::default())?;
        let specs = converter.event_specs();

        println!(
            "{:<12} {:<12} {:<8} {}",
            provider.name,
            provider.platform,
            specs.len(),
            provider.description
        );

        if show_events {
            for spec in specs {
                println!(
                    "  {:<30} -> {}.{}",
                    spec.source,
                    spec.event_type,
                    spec.detail_type.describe()
                );
            }
        }
    }

    Ok(())
}
