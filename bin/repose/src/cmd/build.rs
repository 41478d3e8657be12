//! Build command - copies the project into its output directory

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use repose_core::Builder;

use super::load_project;

/// Run the build command.
pub fn run(root: &Path, config_path: Option<&Path>) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?root, ?config_path, "Starting build");

    let (_config, session) = load_project(root, config_path)?;

    let stats = Builder::new(&session).build().wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Site built successfully!");
    println!();
    println!("  Content:    {}", stats.content);
    println!("  Assets:     {}", stats.assets);
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", session.output_dir().display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
