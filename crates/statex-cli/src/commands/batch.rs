//! Batch command - profile many documents in one run.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use statex_core::{ProfileExtractor, ProfileResult};

use super::load_config;
use super::profile::{OutputFormat, format_profile};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory (one file per input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Outcome of profiling one file.
struct BatchResult {
    path: PathBuf,
    result: Option<ProfileResult>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let extractor = ProfileExtractor::with_config(config);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let outcome = match fs::read(&path) {
            Ok(data) => match extractor.extract_from_pdf(&data) {
                Ok(result) => {
                    debug!(
                        "{}: {} fields found in {}ms",
                        path.display(),
                        result.profile.found_count(),
                        result.processing_time_ms
                    );
                    BatchResult {
                        path: path.clone(),
                        result: Some(result),
                        error: None,
                    }
                }
                Err(e) => BatchResult {
                    path: path.clone(),
                    result: None,
                    error: Some(e.to_string()),
                },
            },
            Err(e) => BatchResult {
                path: path.clone(),
                result: None,
                error: Some(e.to_string()),
            },
        };

        if let Some(ref err) = outcome.error {
            error!("{}: {}", path.display(), err);
            if !args.continue_on_error {
                pb.abandon();
                anyhow::bail!("Failed to process {}: {}", path.display(), err);
            }
        } else if let (Some(output_dir), Some(result)) = (&args.output_dir, &outcome.result) {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };
            let out_path = output_dir.join(format!("{}.{}", stem, extension));
            fs::write(&out_path, format_profile(result, args.format)?)?;
        }

        results.push(outcome);
        pb.inc(1);
    }

    pb.finish_with_message("Done");

    let succeeded = results.iter().filter(|r| r.error.is_none()).count();
    let failed = results.len() - succeeded;

    println!();
    println!(
        "{} Processed {} files in {:.1}s ({} ok, {} failed)",
        style("✓").green(),
        results.len(),
        start.elapsed().as_secs_f64(),
        succeeded,
        failed
    );

    for outcome in results.iter().filter(|r| r.error.is_some()) {
        println!(
            "  {} {}: {}",
            style("✗").red(),
            outcome.path.display(),
            outcome.error.as_deref().unwrap_or("unknown error")
        );
    }

    Ok(())
}
