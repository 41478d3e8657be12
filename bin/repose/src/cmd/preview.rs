//! Preview command - serve the built site locally

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use repose_core::{Launcher, SystemLauncher, launcher::HANDOFF_PAUSE};
use tokio::net::TcpListener;

use super::load_project;
use crate::server::create_router;

/// Run the preview command.
///
/// Serves the output directory until the process is interrupted.
pub async fn run(
    root: &Path,
    config_path: Option<&Path>,
    port: Option<u16>,
    open_browser: bool,
) -> Result<()> {
    let (config, session) = load_project(root, config_path)?;
    let port = port.unwrap_or(config.preview.port);
    tracing::info!(output = ?session.output_dir(), port, "Setting up the local preview server");

    if !session.output_dir().exists() {
        tracing::warn!(
            "Output directory {} does not exist, run `repose build` first",
            session.output_dir().display()
        );
    }

    let app = create_router(session.output_dir());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    let server = tokio::spawn(async move { axum::serve(listener, app).await });

    let page = config.preview_url_for("index.html");
    println!();
    println!("  Preview server ready at {page}");
    println!("  Press Ctrl+C to stop the server");
    println!();

    tokio::time::sleep(HANDOFF_PAUSE).await;

    if open_browser {
        if let Err(e) = SystemLauncher.open_url(&page) {
            tracing::error!("Failed to open the browser: {e}");
        }
    }

    server
        .await
        .wrap_err("Server task failed")?
        .wrap_err("Server error")?;

    Ok(())
}
