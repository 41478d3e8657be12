//! Init command - scaffold a new project

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use repose_core::{Config, Session, scaffold};

/// Run the init command.
///
/// Creates the folder structure and starter files of a new project at `root`.
pub fn run(root: &Path) -> Result<()> {
    tracing::info!(?root, "Initializing project");

    let config = Config::default();
    let session = Session::new(root, &config);

    let written =
        scaffold::create_project(&session, &config).wrap_err("Error creating site structure")?;

    println!();
    println!("  Project created!");
    println!();
    for path in &written {
        println!("  ✓ {}", path.display());
    }
    println!();
    println!("  Next: repose new blog my-first-post");
    println!();

    Ok(())
}
