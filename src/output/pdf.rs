//! PDF report output writer.

use super::transcript::{create_parent_dirs, validate_output_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write PDF bytes returned by the report endpoint to a file
///
/// **Public** - main entry point for PDF output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_pdf(bytes: &[u8], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing PDF to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(ext) = output_path.extension() {
        if ext != "pdf" {
            debug!(
                "Warning: file does not have .pdf extension: {}",
                output_path.display()
            );
        }
    }

    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(bytes).map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "PDF written successfully ({} bytes, {:.2} KB)",
        bytes.len(),
        bytes.len() as f64 / 1024.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_pdf() {
        let temp_file = NamedTempFile::new().unwrap();
        let bytes = b"%PDF-1.4 fake report";

        write_pdf(bytes, temp_file.path()).unwrap();

        assert_eq!(std::fs::read(temp_file.path()).unwrap(), bytes);
    }

    #[test]
    fn test_write_pdf_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("reports/2026/report.pdf");

        write_pdf(b"%PDF", &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
