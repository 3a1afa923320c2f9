//! Config subcommands handler

use anyhow::{bail, Result};

use newyear::Config;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the configuration file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
