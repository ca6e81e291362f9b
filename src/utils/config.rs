//! Configuration and constants for the client.

use crate::stream::event::MacroSplit;
use std::time::Duration;

/// Default analysis server URL
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Request timeout. Covers the whole exchange including the streamed
/// analysis body, so it is deliberately generous.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

// Wire framing for the analysis event stream:
// records separated by a blank line, payloads on `data: ` lines
pub const RECORD_DELIMITER: &str = "\n\n";
pub const DATA_PREFIX: &str = "data: ";

// Progress estimate ramps to 90% over the first 1000 transcript characters
// and is pinned there until the final event arrives
pub const PROGRESS_CAP: f64 = 90.0;
pub const PROGRESS_FULL_TRANSCRIPT: f64 = 1000.0;

/// Fallback macro split used when the server payload is missing or malformed
pub const DEFAULT_MACROS: MacroSplit = MacroSplit {
    carbs: 40.0,
    proteins: 30.0,
    fats: 30.0,
};

/// Read buffer size for stream consumption
pub const READ_BUFFER_SIZE: usize = 8 * 1024;

// Upload types accepted by the analysis endpoint
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Chart series labels, in wire-field order (carbs, proteins, fats)
pub const CHART_LABELS: [&str; 3] = ["Carbohydrates", "Proteins", "Fats"];
