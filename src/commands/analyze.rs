//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Uploads the meal image
//! 2. Consumes the streamed analysis, mirroring the transcript to stdout
//! 3. Renders the macro split chart
//! 4. Optionally saves the transcript and requests a PDF report

use crate::api::{ApiClient, ReportRequest};
use crate::output::{write_pdf, write_transcript};
use crate::render::chart::{chart_data_url, render_text_chart};
use crate::render::highlight::strip_markup;
use crate::render::state::{Effect, SessionPhase};
use crate::session::{consume_stream, EffectSink};
use crate::utils::config::{DEFAULT_MACROS, IMAGE_EXTENSIONS};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Analysis server URL
    pub server_url: String,

    /// Path to the meal image
    pub image: PathBuf,

    /// Output path for the transcript snapshot (optional)
    pub transcript_out: Option<PathBuf>,

    /// Output path for the PDF report (optional)
    pub report_out: Option<PathBuf>,
}

/// Terminal effect sink: mirrors the streamed transcript to stdout and
/// captures the final snapshot for export
#[derive(Default)]
struct TermRenderer {
    printed: usize,
    snapshot_html: Option<String>,
}

impl EffectSink for TermRenderer {
    fn handle(&mut self, effect: Effect) {
        match effect {
            Effect::RenderTranscript { html } => {
                // The effect carries the full re-rendered transcript; the
                // terminal only wants the part not printed yet
                let plain = strip_markup(&html);
                if plain.len() > self.printed {
                    print!("{}", &plain[self.printed..]);
                    std::io::stdout().flush().ok();
                    self.printed = plain.len();
                }
            }

            Effect::RenderChart { macros } => {
                println!("\n\nMacronutrient split:");
                print!("{}", render_text_chart(&macros));
            }

            Effect::StoreSnapshot { html } => {
                self.snapshot_html = Some(html);
            }

            Effect::RenderImage { data_url } => {
                debug!("Analyzed image payload received ({} bytes)", data_url.len());
            }

            Effect::SurfaceError { message } => {
                eprintln!("\nAnalysis failed: {}", message);
            }
        }
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Upload or transport failures
/// * Server-reported analysis errors
/// * A stream that ends before the analysis completes
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting analysis for image: {}", args.image.display());
    info!("Server: {}", args.server_url);

    let client = ApiClient::new(&args.server_url).context("Failed to create API client")?;

    // Step 1: Upload
    info!("Step 1/3: Uploading image...");
    let response = client
        .analyze(&args.image)
        .context("Failed to upload image for analysis")?;

    // Step 2: Consume the stream
    info!("Step 2/3: Consuming analysis stream...");
    let mut renderer = TermRenderer::default();
    let state = consume_stream(response, &mut renderer)
        .context("Failed while reading the analysis stream")?;

    match &state.phase {
        SessionPhase::Failed(message) => anyhow::bail!("Analysis failed: {}", message),
        SessionPhase::Streaming => {
            anyhow::bail!("Stream ended before the analysis completed")
        }
        SessionPhase::Complete => {}
    }

    let macros = state.macros.unwrap_or(DEFAULT_MACROS);
    let snapshot = renderer
        .snapshot_html
        .unwrap_or_else(|| crate::render::highlight::highlight_numbers(&state.transcript));
    let clean_text = strip_markup(&snapshot);

    debug!(
        "Analysis complete: {} transcript chars, macros {:?}",
        state.transcript.chars().count(),
        macros
    );

    // Step 3: Write outputs
    info!("Step 3/3: Writing outputs...");

    if let Some(path) = &args.transcript_out {
        write_transcript(&clean_text, path).context("Failed to write transcript snapshot")?;
        info!("✓ Transcript written to: {}", path.display());
    }

    if let Some(path) = &args.report_out {
        let request = ReportRequest {
            chart_image: chart_data_url(&macros),
            nutrition_text: clean_text.clone(),
        };
        let pdf = client
            .download_report(&request)
            .context("Failed to generate PDF report")?;
        write_pdf(&pdf, path).context("Failed to write PDF report")?;
        info!("✓ Report written to: {}", path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    super::validate_server_url(&args.server_url)?;

    let ext = args
        .image
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => anyhow::bail!("Image must be a .jpg, .jpeg, or .png file"),
    }

    if !args.image.exists() {
        anyhow::bail!("Image file not found: {}", args.image.display());
    }

    Ok(())
}
