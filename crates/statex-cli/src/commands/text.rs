//! Text command - dump the acquired text blob of a document.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use statex_core::PageScope;

use super::{ScopeArg, acquire_input, load_config};

/// Arguments for the text command.
#[derive(Args)]
pub struct TextArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Page scope to acquire
    #[arg(short, long, value_enum, default_value = "all-pages")]
    scope: ScopeArg,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: TextArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let scope: PageScope = args.scope.into();
    info!("acquiring {:?} text from {}", scope, args.input.display());

    let text = acquire_input(&args.input, scope, &config)?;

    if text.is_empty() {
        anyhow::bail!("No usable text layer in {}", args.input.display());
    }

    if let Some(output_path) = &args.output {
        fs::write(output_path, &text)?;
    } else {
        println!("{}", text);
    }

    Ok(())
}
