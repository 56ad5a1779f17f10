//! Extract command - pull a single field out of a document.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use statex_core::{FieldKind, extract_field};

use super::{ScopeArg, acquire_input, load_config};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Field to extract (e.g. pan, ifsc, opening-balance)
    #[arg(short, long)]
    field: String,

    /// Override the field's preferred page scope
    #[arg(short, long, value_enum)]
    scope: Option<ScopeArg>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let kind: FieldKind = args.field.parse().map_err(anyhow::Error::msg)?;
    let scope = args
        .scope
        .map(Into::into)
        .unwrap_or_else(|| kind.preferred_scope());

    info!("extracting {} from {}", kind, args.input.display());

    let text = acquire_input(&args.input, scope, &config)?;
    debug!("acquired {} characters of text", text.len());

    let value = extract_field(kind, &text, &config);
    let output = serde_json::to_string_pretty(&value)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
    } else {
        println!("{}", output);
    }

    Ok(())
}
