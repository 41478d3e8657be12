//! Repose Core Library
//!
//! Configuration, session paths, and the content creation pipeline for the
//! Repose static site authoring tool.

pub mod build;
pub mod config;
pub mod content;
pub mod create;
pub mod error;
pub mod filename;
pub mod fs;
pub mod launcher;
pub mod prompt;
pub mod scaffold;
pub mod session;
pub mod template;
pub mod theme;

pub use build::{BuildStats, Builder};
pub use config::Config;
pub use content::{ContentRenderer, ContentTypeSpec};
pub use create::{ContentCreator, CreatedContent, EditorStatus};
pub use error::{CoreError, Result};
pub use filename::FileName;
pub use launcher::{Launcher, SystemLauncher};
pub use prompt::{LinePrompt, Prompt};
pub use session::Session;
pub use template::{TemplateResolver, TemplateStatus};
