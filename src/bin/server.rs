//! HTTP server for the PDF to semantic HTML conversion service.
//!
//! Binds to `0.0.0.0:8080` by default; override the port with `PORT`.

use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080u16);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let app = pdf2html::service::router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("pdf2html-server {} listening on {}", pdf2html::VERSION, addr);
    axum::serve(listener, app).await?;

    Ok(())
}
