//! Output writers for transcripts and PDF reports.

pub mod pdf;
pub mod transcript;

// Re-export main entry points
pub use pdf::write_pdf;
pub use transcript::{read_transcript, write_transcript};
