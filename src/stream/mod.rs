//! Streamed-response consumption.
//!
//! This module handles:
//! - Reassembling raw chunks into delimiter-bounded records
//! - Decoding data lines into typed events

pub mod event;
pub mod parser;

// Re-export main types
pub use event::{AnalysisEvent, MacroSplit};
pub use parser::{decode_record, EventStreamParser};
