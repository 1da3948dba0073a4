use crate::config::Config;
use anyhow::Result;
use std::path::Path;

pub fn handle(config_path: &Path, init: bool) -> Result<()> {
    if init {
        if config_path.exists() {
            println!("Config already exists: {}", config_path.display());
        } else {
            Config::default().save_to(config_path)?;
            println!("Wrote default config: {}", config_path.display());
        }
        return Ok(());
    }

    let config = Config::load_from(config_path)?;
    let status = if config_path.exists() { "" } else { " (not found, using defaults)" };

    println!("# {}{}", config_path.display(), status);
    print!("{}", config.to_toml()?);

    Ok(())
}
