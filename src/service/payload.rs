//! Request and response payloads for the conversion endpoint.

use crate::converters::{RenderMetrics, RenderOptions};
use crate::service::error::AppError;
use serde::{Deserialize, Serialize};

/// Filename used when the request does not carry one.
pub const DEFAULT_FILENAME: &str = "document.pdf";

/// Incoming payload for PDF to HTML conversion.
///
/// Exactly one PDF source must be present: `pdf_b64` (inline, base64) or
/// `pdf_url` (fetched by the service). Page bounds are 1-based and
/// inclusive; unset bounds default to the whole document.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    /// Caller-chosen correlation id, echoed back verbatim.
    pub request_id: Option<String>,
    /// Display filename, echoed back (defaults to [`DEFAULT_FILENAME`]).
    pub filename: Option<String>,
    /// Inline PDF bytes, base64-encoded.
    pub pdf_b64: Option<String>,
    /// URL to fetch the PDF from.
    pub pdf_url: Option<String>,
    /// First page to render (1-based, inclusive).
    pub from_page: Option<usize>,
    /// Last page to render (1-based, inclusive).
    pub to_page: Option<usize>,
    /// Style rendering flags.
    #[serde(default)]
    pub options: RenderOptions,
    /// Return the HTML gzip-compressed and base64-encoded instead of plain.
    #[serde(default)]
    pub return_gzip: bool,
}

impl ConvertRequest {
    /// Check that a PDF source is present.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.pdf_b64.is_none() && self.pdf_url.is_none() {
            return Err(AppError::BadRequest(
                "Provide pdf_b64 or pdf_url".to_string(),
            ));
        }
        Ok(())
    }
}

/// Conversion metrics exposed to callers.
#[derive(Debug, Serialize)]
pub struct ConvertMetrics {
    /// Core rendering metrics (pages rendered, styles, effective range).
    #[serde(flatten)]
    pub render: RenderMetrics,
    /// Total pages in the source document.
    pub page_count: usize,
    /// Size of the rendered HTML in bytes (before compression).
    pub html_bytes: usize,
}

/// Outgoing conversion payload.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// Echoed correlation id.
    pub request_id: Option<String>,
    /// Echoed or defaulted filename.
    pub filename: String,
    /// The rendered HTML document (absent when `return_gzip` was set).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Gzipped, base64-encoded HTML (present when `return_gzip` was set).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_gz_b64: Option<String>,
    /// Conversion metrics.
    pub metrics: ConvertMetrics,
}
