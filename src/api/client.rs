//! HTTP client for the NutriX analysis server.

use super::types::{ErrorResponse, ReportRequest};
use crate::utils::config::DEFAULT_REQUEST_TIMEOUT;
use crate::utils::error::ApiError;
use log::{debug, info};
use reqwest::blocking::{multipart, Client, Response};
use std::path::Path;

/// Client for the analysis and report endpoints
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    /// Upload a meal image and return the streaming analysis response.
    ///
    /// The response body is the raw event stream; hand it to
    /// [`crate::session::consume_stream`] to fold it.
    pub fn analyze(&self, image_path: &Path) -> Result<Response, ApiError> {
        info!("Uploading image for analysis: {}", image_path.display());

        let form = multipart::Form::new()
            .file("file", image_path)
            .map_err(ApiError::ImageUnreadable)?;

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .multipart(form)
            .send()
            .map_err(ApiError::RequestFailed)?;

        check_status(response)
    }

    /// Request a PDF report and return its bytes
    pub fn download_report(&self, request: &ReportRequest) -> Result<Vec<u8>, ApiError> {
        info!("Requesting PDF report");
        debug!(
            "Report transcript length: {} chars",
            request.nutrition_text.chars().count()
        );

        let response = self
            .client
            .post(format!("{}/download", self.base_url))
            .json(request)
            .send()
            .map_err(ApiError::RequestFailed)?;

        let response = check_status(response)?;
        let bytes = response.bytes().map_err(ApiError::RequestFailed)?;

        debug!("Received PDF ({} bytes)", bytes.len());
        Ok(bytes.to_vec())
    }
}

/// Reject non-2xx responses, pulling the server's JSON error detail when present
fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorResponse>()
        .map(|body| body.error)
        .unwrap_or_else(|_| "no error detail".to_string());

    Err(ApiError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

/// Strip trailing slashes so endpoint paths join cleanly
fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
