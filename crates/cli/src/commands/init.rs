use anyhow::{Context, Result};
use ngforge_core::ProjectConfig;
use ngforge_core::config::CONFIG_FILE_NAME;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = match cwd {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        println!(
            "ℹ️  {} already exists (use --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }

    let config = ProjectConfig::default();
    let content = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("created config at {}", config_path.display());

    println!("✅ Created {}", config_path.display());
    println!("   • prefix: {}", config.prefix);
    println!("   • source_root: {}", config.source_root.display());

    Ok(())
}
