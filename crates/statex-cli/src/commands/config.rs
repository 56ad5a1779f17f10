//! Config command - inspect and create configuration files.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use statex_core::StatexConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Path to an existing config file (default: built-in defaults)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Write a config file with the default values
    Init {
        /// Output path for the configuration file
        #[arg(short, long, default_value = "statex.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub async fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { path } => show_config(path),
        ConfigCommand::Init { output, force } => init_config(output, force),
    }
}

fn show_config(path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match path {
        Some(path) => StatexConfig::from_file(&path)?,
        None => {
            println!(
                "{} No config file given, showing defaults.",
                style("ℹ").blue()
            );
            StatexConfig::default()
        }
    };

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn init_config(output: PathBuf, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output.display()
        );
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    StatexConfig::default().save(&output)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output.display()
    );

    Ok(())
}
