use anyhow::{anyhow, Context, Result};
use clap::Parser;
use registrar_config::domains::logging::LogFormat;
use registrar_config::{ConfigLoader, LoggingConfig, RegistrarConfig};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigCommands};
use commands::{
    handle_config_generate, handle_config_show, handle_config_validate, handle_register, Target,
};

/// `registrar/config.yaml` under the platform config directory
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("registrar").join("config.yaml"))
}

/// Load configuration from file or use defaults
fn load_config(config_path: Option<&PathBuf>) -> Result<RegistrarConfig> {
    let loader = ConfigLoader::new();

    match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(anyhow!("Configuration file not found: {:?}", path));
            }
            loader
                .from_file(path)
                .context(format!("Failed to load configuration from {:?}", path))
        }
        None => match default_config_path().filter(|path| path.exists()) {
            Some(path) => loader
                .from_file(&path)
                .context(format!("Failed to load configuration from {:?}", path)),
            None => loader
                .from_env()
                .context("Failed to load configuration from environment"),
        },
    }
}

/// Pick the filter directive: CLI flag, then `RUST_LOG`, then configuration
fn build_env_filter(log_level: Option<&String>, logging: &LoggingConfig) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| {
            eprintln!("Invalid log level '{}', falling back to 'info'", level);
            EnvFilter::new("info")
        }),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str())),
    }
}

/// Initialize tracing; stdout is reserved for command output
fn init_tracing(log_level: Option<&String>, logging: &LoggingConfig) -> Result<()> {
    let env_filter = build_env_filter(log_level, logging);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Text => builder.init(),
    }

    debug!("Tracing initialized");
    Ok(())
}

/// `config validate` and `config generate` must work while the usual
/// configuration file is broken, so they skip loading it
fn needs_config(command: Option<&Commands>) -> bool {
    !matches!(
        command,
        None | Some(Commands::Config {
            config_cmd: ConfigCommands::Validate { .. } | ConfigCommands::Generate { .. },
        })
    )
}

/// Run a mutation command and print the returned id
async fn run_register(
    config: &RegistrarConfig,
    target: Target,
    args: &cli::MutationArgs,
) -> Result<()> {
    let id = handle_register(config, target, args).await?;
    println!("{}", id);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if needs_config(cli.command.as_ref()) {
        load_config(cli.config.as_ref())?
    } else {
        RegistrarConfig::default()
    };
    init_tracing(cli.log_level.as_ref(), &config.logging)?;

    info!("Registrar CLI starting");

    match &cli.command {
        Some(Commands::ResourceDefinition(args)) => {
            run_register(&config, Target::ResourceDefinition, args).await
        }
        Some(Commands::Integration(args)) => run_register(&config, Target::Integration, args).await,
        Some(Commands::Repository(args)) => run_register(&config, Target::Repository, args).await,
        Some(Commands::Config { config_cmd }) => match config_cmd {
            ConfigCommands::Validate { config_file } => handle_config_validate(config_file),
            ConfigCommands::Generate { output, force } => handle_config_generate(output, *force),
            ConfigCommands::Show { format } => handle_config_show(&config, format),
        },
        None => {
            // If no subcommand is provided, print help
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            cmd.print_help().context("Failed to print help")?;
            println!();
            Ok(())
        }
    }
}
