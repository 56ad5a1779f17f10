//! Profile command - extract every field from a single document.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use statex_core::{ProfileExtractor, ProfileResult, StatementProfile};

use super::{is_pdf, load_config};

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print warnings for fields that came back empty
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProfileArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("profiling {}", args.input.display());

    let extractor = ProfileExtractor::with_config(config);
    let result = if is_pdf(&args.input) {
        let data = fs::read(&args.input)?;
        extractor.extract_from_pdf(&data)?
    } else {
        let text = fs::read_to_string(&args.input)?.to_uppercase();
        extractor.extract(&text)
    };

    debug!("profile extracted in {}ms", result.processing_time_ms);

    let output = format_profile(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    Ok(())
}

pub fn format_profile(result: &ProfileResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.profile)?),
        OutputFormat::Csv => format_csv(&result.profile),
        OutputFormat::Text => Ok(format_text(&result.profile)),
    }
}

fn format_csv(profile: &StatementProfile) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "account_type",
        "customer_id",
        "pan",
        "aadhaar",
        "ifsc",
        "mobile",
        "account_number",
        "emails",
        "ckyc",
        "opening_balance",
        "closing_balance",
        "dob",
        "statement_period",
    ])?;

    wtr.write_record([
        profile
            .account_type
            .as_ref()
            .map(|t| t.account_type.clone())
            .unwrap_or_default(),
        profile.customer_id.clone().unwrap_or_default(),
        profile.pan.clone().unwrap_or_default(),
        profile.aadhaar.clone().unwrap_or_default(),
        profile.ifsc.clone().unwrap_or_default(),
        profile.mobile.clone().unwrap_or_default(),
        profile.account_number.clone().unwrap_or_default(),
        profile.emails.join(";"),
        profile.ckyc.clone().unwrap_or_default(),
        profile
            .opening_balance
            .as_ref()
            .map(|b| b.amount.clone())
            .unwrap_or_default(),
        profile
            .closing_balance
            .as_ref()
            .map(|b| b.amount.clone())
            .unwrap_or_default(),
        profile
            .dob
            .as_ref()
            .map(|d| d.date.clone())
            .unwrap_or_default(),
        profile
            .statement_period
            .as_ref()
            .map(|p| format!("{} to {}", p.from_date, p.to_date))
            .unwrap_or_default(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(profile: &StatementProfile) -> String {
    fn line(output: &mut String, label: &str, value: Option<&str>) {
        match value {
            Some(v) => output.push_str(&format!("{:18} {}\n", label, v)),
            None => output.push_str(&format!("{:18} -\n", label)),
        }
    }

    let mut output = String::new();

    line(
        &mut output,
        "Account type:",
        profile.account_type.as_ref().map(|t| t.account_type.as_str()),
    );
    line(&mut output, "Customer id:", profile.customer_id.as_deref());
    line(&mut output, "PAN:", profile.pan.as_deref());
    line(&mut output, "Aadhaar:", profile.aadhaar.as_deref());
    line(&mut output, "IFSC:", profile.ifsc.as_deref());
    line(&mut output, "Mobile:", profile.mobile.as_deref());
    line(
        &mut output,
        "Account number:",
        profile.account_number.as_deref(),
    );

    let emails = profile.emails.join(", ");
    line(
        &mut output,
        "Emails:",
        if emails.is_empty() { None } else { Some(&emails) },
    );

    line(&mut output, "CKYC:", profile.ckyc.as_deref());

    let opening = profile
        .opening_balance
        .as_ref()
        .map(|b| format!("{} ({:?})", b.amount, b.sign));
    line(&mut output, "Opening balance:", opening.as_deref());

    let closing = profile
        .closing_balance
        .as_ref()
        .map(|b| format!("{} ({:?})", b.amount, b.sign));
    line(&mut output, "Closing balance:", closing.as_deref());

    line(
        &mut output,
        "Date of birth:",
        profile.dob.as_ref().map(|d| d.date.as_str()),
    );

    let period = profile
        .statement_period
        .as_ref()
        .map(|p| format!("{} to {}", p.from_date, p.to_date));
    line(&mut output, "Statement period:", period.as_deref());

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text_marks_missing_fields() {
        let profile = StatementProfile {
            pan: Some("ABCDE1234F".to_string()),
            ..Default::default()
        };
        let text = format_text(&profile);
        assert!(text.contains("PAN:"));
        assert!(text.contains("ABCDE1234F"));
        assert!(
            text.lines()
                .any(|l| l.starts_with("Aadhaar:") && l.ends_with('-'))
        );
    }

    #[test]
    fn test_format_csv_single_row() {
        let profile = StatementProfile {
            customer_id: Some("884512".to_string()),
            emails: vec!["a@b.com".to_string(), "c@d.com".to_string()],
            ..Default::default()
        };
        let csv = format_csv(&profile).unwrap();
        let lines: Vec<&str> = csv.trim().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("884512"));
        assert!(lines[1].contains("a@b.com;c@d.com"));
    }
}
