//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components to perform user tasks.

pub mod analyze;
pub mod report;

// Re-export main command functions
pub use analyze::{execute_analyze, validate_args, AnalyzeArgs};
pub use report::{default_report_path, execute_report, ReportArgs};

/// Basic server URL validation shared by the commands
pub(crate) fn validate_server_url(url: &str) -> anyhow::Result<()> {
    if url.is_empty() {
        anyhow::bail!("Server URL cannot be empty");
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("Server URL must start with http:// or https://");
    }

    Ok(())
}
