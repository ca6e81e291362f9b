//! Transcript snapshot output.
//!
//! Writes the cleaned transcript text to disk with a small generated-at
//! header, so saved snapshots can be re-exported later via the `report`
//! command.

use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER_MARKER: &str = "# NutriX transcript";

/// Write a transcript snapshot to a file
///
/// **Public** - main entry point for transcript output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_transcript(text: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing transcript to: {}", output_path.display());

    validate_output_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", HEADER_MARKER).map_err(OutputError::WriteFailed)?;
    writeln!(writer, "# generated_at: {}", Utc::now().to_rfc3339()).map_err(OutputError::WriteFailed)?;
    writeln!(writer).map_err(OutputError::WriteFailed)?;
    writer.write_all(text.as_bytes()).map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Transcript written successfully ({} bytes)", text.len());
    Ok(())
}

/// Read a transcript snapshot back, dropping the header lines
///
/// **Public** - used by the report command
pub fn read_transcript(input_path: impl AsRef<Path>) -> Result<String, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading transcript from: {}", input_path.display());

    let content = std::fs::read_to_string(input_path).map_err(OutputError::ReadFailed)?;

    // Header lines start with '#' and are followed by one blank line;
    // files without a header are taken as-is
    if !content.starts_with(HEADER_MARKER) {
        return Ok(content);
    }

    let mut lines = content.lines();
    for line in lines.by_ref() {
        if line.is_empty() {
            break;
        }
    }

    Ok(lines.collect::<Vec<_>>().join("\n"))
}

/// Create parent directories for an output path if needed
///
/// **Private** - shared by the output writers
pub(super) fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

/// Validate that an output path is writable
///
/// **Private** - shared by the output writers
pub(super) fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
