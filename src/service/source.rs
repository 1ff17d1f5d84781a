//! PDF byte acquisition.
//!
//! Supplies raw PDF bytes from either the inline base64 payload or a remote
//! fetch, enforcing size limits and failing with 400-class errors before
//! the rendering core ever runs.

use crate::service::error::AppError;
use crate::service::payload::ConvertRequest;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::io::Write;
use std::time::Duration;

/// Maximum accepted PDF size.
pub const MAX_PDF_BYTES: usize = 50 * 1024 * 1024;

/// Timeout for fetching a remote PDF.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Load the PDF bytes named by a conversion request.
///
/// Prefers the inline payload when both sources are present.
pub async fn load_pdf_bytes(request: &ConvertRequest) -> Result<Vec<u8>, AppError> {
    if let Some(encoded) = &request.pdf_b64 {
        return decode_inline(encoded);
    }
    if let Some(url) = &request.pdf_url {
        return fetch_remote(url).await;
    }
    Err(AppError::BadRequest(
        "Provide pdf_b64 or pdf_url".to_string(),
    ))
}

fn decode_inline(encoded: &str) -> Result<Vec<u8>, AppError> {
    let bytes = BASE64
        .decode(encoded.trim())
        .map_err(|e| AppError::BadRequest(format!("Invalid base64: {}", e)))?;
    check_size(bytes.len())?;
    Ok(bytes)
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>, AppError> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| AppError::Internal(format!("http client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| {
            log::warn!("failed to fetch PDF from {}: {}", url, e);
            AppError::BadRequest(format!("Unable to download pdf_url: {}", e))
        })?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Unable to download pdf_url: {}", e)))?;
    check_size(bytes.len())?;
    Ok(bytes.to_vec())
}

fn check_size(len: usize) -> Result<(), AppError> {
    if len > MAX_PDF_BYTES {
        return Err(AppError::BadRequest(format!(
            "PDF exceeds the {} byte limit",
            MAX_PDF_BYTES
        )));
    }
    Ok(())
}

/// Gzip a rendered document and base64-encode the result.
pub fn gzip_base64(html: &str) -> Result<String, AppError> {
    let mut encoder =
        flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(html.as_bytes())
        .and_then(|_| encoder.finish())
        .map(|compressed| BASE64.encode(compressed))
        .map_err(|e| AppError::Internal(format!("gzip: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn request_with_b64(encoded: &str) -> ConvertRequest {
        serde_json::from_str(&format!(r#"{{"pdf_b64": "{}"}}"#, encoded)).unwrap()
    }

    #[tokio::test]
    async fn test_inline_base64_decodes() {
        let request = request_with_b64(&BASE64.encode(b"%PDF-1.4"));
        let bytes = load_pdf_bytes(&request).await.unwrap();
        assert_eq!(bytes, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_invalid_base64_is_bad_request() {
        let request = request_with_b64("not*base64*");
        let err = load_pdf_bytes(&request).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_missing_source_is_bad_request() {
        let request: ConvertRequest = serde_json::from_str("{}").unwrap();
        let err = load_pdf_bytes(&request).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_gzip_base64_round_trip() {
        let html = "<html><body>compress me</body></html>";
        let encoded = gzip_base64(html).unwrap();

        let compressed = BASE64.decode(encoded).unwrap();
        let mut decoder = flate2::read::GzDecoder::new(&compressed[..]);
        let mut decompressed = String::new();
        decoder.read_to_string(&mut decompressed).unwrap();
        assert_eq!(decompressed, html);
    }
}
