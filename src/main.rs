//! NutriX Client CLI
//!
//! Uploads a meal photo to the NutriX analysis server, streams the
//! nutrition analysis back with a live transcript and macro chart, and
//! requests PDF reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use nutrix_client::commands::{
    default_report_path, execute_analyze, execute_report, validate_args, AnalyzeArgs, ReportArgs,
};
use nutrix_client::stream::event::MacroSplit;
use nutrix_client::utils::config::{DEFAULT_MACROS, DEFAULT_SERVER_URL};

/// NutriX Client - streaming meal-photo nutrition analysis
#[derive(Parser, Debug)]
#[command(name = "nutrix")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload a meal photo and stream the nutrition analysis
    Analyze {
        /// Analysis server URL
        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        server: String,

        /// Path to the meal image (jpg, jpeg, or png)
        #[arg(short, long)]
        image: PathBuf,

        /// Save the transcript snapshot to this path
        #[arg(short, long)]
        transcript: Option<PathBuf>,

        /// Request a PDF report and save it to this path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Re-export a saved transcript as a PDF report
    Report {
        /// Analysis server URL
        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        server: String,

        /// Path to a saved transcript snapshot
        #[arg(short, long)]
        transcript: PathBuf,

        /// Carbohydrate percentage for the chart
        #[arg(long, default_value_t = DEFAULT_MACROS.carbs)]
        carbs: f64,

        /// Protein percentage for the chart
        #[arg(long, default_value_t = DEFAULT_MACROS.proteins)]
        proteins: f64,

        /// Fat percentage for the chart
        #[arg(long, default_value_t = DEFAULT_MACROS.fats)]
        fats: f64,

        /// Output path for the PDF (defaults to a timestamped name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            server,
            image,
            transcript,
            report,
        } => {
            let args = AnalyzeArgs {
                server_url: server,
                image,
                transcript_out: transcript,
                report_out: report,
            };

            validate_args(&args)?;
            execute_analyze(args)?;
        }

        Commands::Report {
            server,
            transcript,
            carbs,
            proteins,
            fats,
            output,
        } => {
            let args = ReportArgs {
                server_url: server,
                transcript,
                macros: MacroSplit {
                    carbs,
                    proteins,
                    fats,
                },
                output: output.unwrap_or_else(default_report_path),
            };

            execute_report(args)?;
        }

        Commands::Version => display_version(),
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("NutriX Client v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Streaming analysis client for the NutriX meal-photo nutrition analyzer.");
}
