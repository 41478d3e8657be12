//! Command implementations.

pub mod build;
pub mod init;
pub mod new;
pub mod preview;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use repose_core::{Config, Session};

/// Load the project configuration and resolve its directories.
///
/// `config_path` defaults to `config.toml` below `root`.
pub fn load_project(root: &Path, config_path: Option<&Path>) -> Result<(Config, Session)> {
    let config_path = config_path.map_or_else(|| Session::config_file(root), Path::to_path_buf);
    let config =
        Config::load_with_env(&config_path).wrap_err("Failed to load configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let session = Session::new(root, &config);
    Ok((config, session))
}
