use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use buildrunner_core::Settings;
use buildrunner_core::config::SETTINGS_FILENAME;
use tracing::info;

pub fn init_command(cwd: Option<&str>, sdk_path: Option<&str>, force: bool) -> Result<()> {
    let project_root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(SETTINGS_FILENAME);
    if config_path.exists() && !force {
        println!("Config already exists at: {}", config_path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let settings = Settings {
        sdk_path: sdk_path.map(str::to_string),
    };
    settings.save_to_file(&config_path)?;

    info!("wrote settings to {}", config_path.display());
    println!("Created {}", config_path.display());
    Ok(())
}
