//! Filesystem helpers shared by the content and template steps.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

use walkdir::WalkDir;

/// Check whether a path exists.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Search `root` and all of its subdirectories for a file called `file_name`.
///
/// A missing root counts as "not found" rather than an error.
pub fn exists_recursive(file_name: &str, root: &Path) -> Result<bool, walkdir::Error> {
    if !root.exists() {
        return Ok(false);
    }

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name() == file_name {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Create a new file with `contents`, creating missing parent directories.
///
/// Fails if something already exists at `path`.
pub fn create(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
