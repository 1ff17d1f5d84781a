//! HTTP routes for the conversion service.
//!
//! `GET /health` for orchestrator probes; `POST /pdf2html` (with the
//! legacy `/pdf2htmlex` alias) for conversions. Conversions run on a
//! blocking worker with an outer timeout; an abandoned conversion drops
//! its style registry with the task.

use crate::converters::{DocumentAssembler, PageRange, RenderedDocument};
use crate::extract::PdfiumExtractor;
use crate::service::error::AppError;
use crate::service::payload::{
    ConvertMetrics, ConvertRequest, ConvertResponse, DEFAULT_FILENAME,
};
use crate::service::source;
use axum::{
    routing::{get, post},
    Json, Router,
};
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Hard ceiling on one conversion.
pub const CONVERT_TIMEOUT: Duration = Duration::from_secs(180);

/// Build the service router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/pdf2html", post(convert))
        .route("/pdf2htmlex", post(convert))
        .layer(CorsLayer::permissive())
}

/// Simple health endpoint used by orchestrators.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// Convert a PDF to semantic HTML.
async fn convert(Json(request): Json<ConvertRequest>) -> Result<Json<ConvertResponse>, AppError> {
    request.validate()?;
    let bytes = source::load_pdf_bytes(&request).await?;

    log::info!(
        "converting request_id={:?} ({} bytes)",
        request.request_id,
        bytes.len()
    );

    let range = PageRange {
        from: request.from_page,
        to: request.to_page,
    };
    let options = request.options.clone();

    let task = tokio::task::spawn_blocking(move || -> crate::Result<RenderedDocument> {
        let extractor = PdfiumExtractor::new(bytes)?;
        Ok(DocumentAssembler::new(options).assemble(&extractor, &range))
    });

    let document = tokio::time::timeout(CONVERT_TIMEOUT, task)
        .await
        .map_err(|_| AppError::Timeout)?
        .map_err(|e| AppError::Internal(format!("conversion task failed: {}", e)))??;

    let html = document.to_html();
    let metrics = ConvertMetrics {
        render: document.metrics,
        page_count: document.page_count,
        html_bytes: html.len(),
    };

    let (plain, compressed) = if request.return_gzip {
        (None, Some(source::gzip_base64(&html)?))
    } else {
        (Some(html), None)
    };

    Ok(Json(ConvertResponse {
        request_id: request.request_id,
        filename: request.filename.unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
        html: plain,
        html_gz_b64: compressed,
        metrics,
    }))
}
