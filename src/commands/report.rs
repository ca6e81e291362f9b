//! Report command implementation.
//!
//! Re-exports a saved transcript as a PDF report: rebuilds the macro split
//! chart, posts chart + text to the report endpoint, and writes the
//! returned document.

use crate::api::{ApiClient, ReportRequest};
use crate::output::{read_transcript, write_pdf};
use crate::render::chart::chart_data_url;
use crate::stream::event::MacroSplit;
use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Analysis server URL
    pub server_url: String,

    /// Path to a saved transcript snapshot
    pub transcript: PathBuf,

    /// Macro split to chart
    pub macros: MacroSplit,

    /// Output path for the PDF
    pub output: PathBuf,
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
pub fn execute_report(args: ReportArgs) -> Result<()> {
    super::validate_server_url(&args.server_url)?;

    info!("Generating report from transcript: {}", args.transcript.display());

    let text = read_transcript(&args.transcript).context("Failed to read transcript snapshot")?;
    if text.trim().is_empty() {
        anyhow::bail!("Transcript is empty: {}", args.transcript.display());
    }

    let client = ApiClient::new(&args.server_url).context("Failed to create API client")?;
    let request = ReportRequest {
        chart_image: chart_data_url(&args.macros),
        nutrition_text: text,
    };

    let pdf = client
        .download_report(&request)
        .context("Failed to generate PDF report")?;
    write_pdf(&pdf, &args.output).context("Failed to write PDF report")?;

    info!("✓ Report written to: {}", args.output.display());
    Ok(())
}

/// Timestamped default output path for generated reports
pub fn default_report_path() -> PathBuf {
    PathBuf::from(format!(
        "NutriX_Report_{}.pdf",
        Utc::now().format("%Y%m%d_%H%M%S")
    ))
}
