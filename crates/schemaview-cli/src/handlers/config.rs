use anyhow::{Result, bail};
use schemaview_render::RenderConfig;
use std::path::Path;

pub fn show(config_path: &Path) -> Result<()> {
    let config = RenderConfig::load_from(config_path)?;

    if config_path.exists() {
        println!("# {}", config_path.display());
    } else {
        println!("# {} (not found, using defaults)", config_path.display());
    }
    print!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    RenderConfig::default().save_to(config_path)?;
    println!("Wrote default config to {}", config_path.display());

    Ok(())
}
