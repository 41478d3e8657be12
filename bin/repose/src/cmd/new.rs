//! New command - create new content from the content template

use std::path::Path;

use color_eyre::eyre::Result;
use repose_core::{ContentCreator, LinePrompt, SystemLauncher};

use super::load_project;

/// Usage line shown when the arguments are wrong.
pub const USAGE: &str = "Usage: repose new [CONTENTTYPE] [FILENAME]";

/// Split the raw arguments into content type and filename.
pub fn parse_args(args: &[String]) -> std::result::Result<(&str, &str), &'static str> {
    match args {
        [type_dir, file_name] => Ok((type_dir.as_str(), file_name.as_str())),
        [] | [_] => Err("Missing arguments."),
        _ => Err("File name cannot contain spaces."),
    }
}

/// Run the new command.
///
/// Wrong arguments only produce a usage warning. A failed content write is
/// reported without failing the process.
pub fn run(root: &Path, config_path: Option<&Path>, args: &[String]) -> Result<()> {
    let (type_dir, file_name) = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(problem) => {
            tracing::warn!("{problem} {USAGE}");
            return Ok(());
        }
    };

    tracing::info!(type_dir, file_name, "Creating new content");
    let (config, session) = load_project(root, config_path)?;

    let mut prompt = LinePrompt::stdio();
    let launcher = SystemLauncher;
    let mut creator = ContentCreator::new(&config, &session, &mut prompt, &launcher);

    match creator.create(type_dir, file_name) {
        Ok(created) => {
            tracing::debug!(?created, "Content created");
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("  ✗ {e}");
        }
    }

    Ok(())
}
