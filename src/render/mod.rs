//! Incremental rendering of the analysis stream.
//!
//! This module handles:
//! - Folding decoded events into display state
//! - Sanitizing and highlighting transcript text
//! - Rendering the macro split chart (text and SVG)

pub mod chart;
pub mod highlight;
pub mod state;

// Re-export main types
pub use state::{DisplayState, Effect, SessionPhase};
