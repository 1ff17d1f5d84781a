//! HTTP conversion service.
//!
//! A thin request/response boundary around the rendering core: it acquires
//! PDF bytes (inline base64 or remote URL), runs the extractor and
//! assembler on a blocking worker with a timeout, and maps failures to
//! HTTP status codes (400 bad input, 500 internal fault, 504 timeout).
//! No rendering decisions live here.

pub mod error;
pub mod payload;
pub mod routes;
pub mod source;

// Re-export main types
pub use error::AppError;
pub use payload::{ConvertRequest, ConvertResponse};
pub use routes::router;
