//! Project configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Name of the configuration file at the project root.
pub const CONFIG_FILE: &str = "config.toml";

/// Editor value that explicitly disables launching an editor.
const EDITOR_DISABLED: &str = "none";

/// Main configuration structure for Repose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Editor settings.
    #[serde(default)]
    pub editor: EditorConfig,

    /// Local preview settings.
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Author written into new content.
    #[serde(default)]
    pub author: String,

    /// Theme identifier used for generated templates.
    #[serde(default = "default_theme")]
    pub theme: String,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Content directory, relative to the project root.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Output directory for the generated site, relative to the project root.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// External editor configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Program used to open new content. Empty or `"none"` disables it.
    #[serde(default)]
    pub command: String,
}

/// Local preview configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// URL opened in the browser once the preview server is up.
    #[serde(default = "default_preview_url")]
    pub url: String,

    /// Port the preview server listens on.
    #[serde(default = "default_preview_port")]
    pub port: u16,
}

// Default value functions
fn default_title() -> String {
    "My Repose Site".to_string()
}

fn default_theme() -> String {
    "none".to_string()
}

fn default_content_dir() -> String {
    "content".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_preview_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_preview_port() -> u16 {
    8080
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            author: String::new(),
            theme: default_theme(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            url: default_preview_url(),
            port: default_preview_port(),
        }
    }
}

impl EditorConfig {
    /// The editor program, unless launching is disabled.
    pub fn program(&self) -> Option<&str> {
        let command = self.command.trim();
        if command.is_empty() || command == EDITOR_DISABLED {
            None
        } else {
            Some(command)
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `REPOSE_*` environment variables override the file.
    ///
    /// Nested keys use a double underscore, e.g. `REPOSE_SITE__AUTHOR`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .add_source(
                config::Environment::with_prefix("REPOSE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.build.content_dir.is_empty() {
            return Err(CoreError::config("build.content_dir cannot be empty"));
        }

        if self.build.output_dir.is_empty() {
            return Err(CoreError::config("build.output_dir cannot be empty"));
        }

        if self.preview.url.ends_with('/') {
            tracing::warn!("preview.url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the preview URL for a page.
    pub fn preview_url_for(&self, page: &str) -> String {
        let base = self.preview.url.trim_end_matches('/');
        let page = page.trim_start_matches('/');
        format!("{base}/{page}")
    }
}
