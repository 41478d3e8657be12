//! Directories resolved for the current invocation.

use std::path::{Path, PathBuf};

use crate::config::{CONFIG_FILE, Config};

/// Template directory, relative to the project root.
pub const TEMPLATE_DIR: &str = "template";

/// Static asset directory, relative to the project root.
pub const STATIC_DIR: &str = "static";

/// Root path and the project directories derived from it.
///
/// The derived directories only change through [`Session::set_root_path`],
/// which recomputes all of them together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root: PathBuf,
    content_subdir: PathBuf,
    output_subdir: PathBuf,
    content_dir: PathBuf,
    output_dir: PathBuf,
    template_dir: PathBuf,
}

impl Session {
    /// Resolve the project directories below `root`.
    ///
    /// An empty root means the current directory.
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        let mut session = Self {
            root: PathBuf::new(),
            content_subdir: PathBuf::from(&config.build.content_dir),
            output_subdir: PathBuf::from(&config.build.output_dir),
            content_dir: PathBuf::new(),
            output_dir: PathBuf::new(),
            template_dir: PathBuf::new(),
        };
        session.set_root_path(root);
        session
    }

    /// Move the session to a new root, recomputing every derived directory.
    pub fn set_root_path(&mut self, root: impl Into<PathBuf>) {
        self.root = root.into();
        self.content_dir = self.root.join(&self.content_subdir);
        self.output_dir = self.root.join(&self.output_subdir);
        self.template_dir = self.root.join(TEMPLATE_DIR);
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join(STATIC_DIR)
    }

    /// Default location of the configuration file for a root.
    pub fn config_file(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }
}
