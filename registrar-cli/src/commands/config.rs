//! Configuration management commands

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use registrar_config::{ConfigLoader, RegistrarConfig};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Handle configuration validation
pub fn handle_config_validate(config_file: &Path) -> Result<()> {
    info!("Validating configuration file: {:?}", config_file);

    if !config_file.exists() {
        return Err(anyhow!("Configuration file not found: {:?}", config_file));
    }

    match ConfigLoader::new().from_file(config_file) {
        Ok(_config) => {
            println!("{}", "✅ Configuration file is valid".green());
            info!("Configuration validation passed");
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌ Configuration validation failed:".red(), e);
            error!("Configuration validation failed: {}", e);
            Err(e).context(format!("Invalid configuration in {:?}", config_file))
        }
    }
}

/// Handle configuration generation
pub fn handle_config_generate(output: &Path, force: bool) -> Result<()> {
    info!("Generating sample configuration at: {:?}", output);

    if output.exists() && !force {
        return Err(anyhow!(
            "Output file already exists: {:?}. Use --force to overwrite.",
            output
        ));
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create output directory")?;
    }

    fs::write(output, RegistrarConfig::generate_sample())
        .context("Failed to write configuration file")?;

    println!("✅ Configuration generated at: {:?}", output);
    println!(
        "🔧 Validate with: registrar config validate --config-file {:?}",
        output
    );

    Ok(())
}

/// Render the configuration for display; the token is never shown
pub fn render_config(config: &RegistrarConfig, format: &str) -> Result<String> {
    let redacted = config.redacted();

    match format.to_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml::to_string(&redacted).context("Failed to serialize to YAML"),
        "json" => serde_json::to_string_pretty(&redacted).context("Failed to serialize to JSON"),
        _ => Err(anyhow!(
            "Unknown output format: {}. Valid formats: yaml, json",
            format
        )),
    }
}

/// Handle configuration display
pub fn handle_config_show(config: &RegistrarConfig, format: &str) -> Result<()> {
    info!("Showing configuration (format: {})", format);
    println!("{}", render_config(config, format)?);
    Ok(())
}
