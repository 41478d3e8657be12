//! Passthrough site build.
//!
//! Mirrors the content tree and the static asset tree into the output
//! directory without rendering them.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{error::Result, session::Session};

/// Build statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of content files copied.
    pub content: usize,

    /// Number of static assets copied.
    pub assets: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Copies a project's sources into its output directory.
#[derive(Debug)]
pub struct Builder {
    content_dir: PathBuf,
    static_dir: PathBuf,
    output_dir: PathBuf,
}

impl Builder {
    /// Create a builder for the session's directories.
    pub fn new(session: &Session) -> Self {
        Self {
            content_dir: session.content_dir().to_path_buf(),
            static_dir: session.static_dir(),
            output_dir: session.output_dir().to_path_buf(),
        }
    }

    /// Run the build.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        info!(output = %self.output_dir.display(), "starting build");

        fs::create_dir_all(&self.output_dir)?;

        let content = copy_tree(&self.content_dir, &self.output_dir)?;
        let assets = copy_tree(&self.static_dir, &self.output_dir)?;

        let stats = BuildStats {
            content,
            assets,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        info!(?stats, "build finished");
        Ok(stats)
    }
}

/// Copy every visible file below `source` into `dest`, keeping relative paths.
fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    if !source.exists() {
        debug!(source = %source.display(), "source directory does not exist, skipping");
        return Ok(0);
    }

    let mut copied = 0;
    let entries = WalkDir::new(source)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    for entry in entries {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let dest_path = dest.join(relative);
        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest_path)?;
        debug!(src = %entry.path().display(), dest = %dest_path.display(), "copied");
        copied += 1;
    }

    Ok(copied)
}
