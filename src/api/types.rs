//! Request and response bodies for the NutriX server API.

use serde::{Deserialize, Serialize};

/// Body of `POST /download`
#[derive(Debug, Clone, Serialize)]
pub struct ReportRequest {
    /// Chart image as a data URL
    pub chart_image: String,

    /// Cleaned transcript text (highlight markup stripped)
    pub nutrition_text: String,
}

/// JSON error body the server returns on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
