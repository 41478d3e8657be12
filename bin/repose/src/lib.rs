//! Repose CLI Library
//!
//! Command implementations and the preview server behind the `repose` binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (init, new, build, preview)
//! - [`server`] - Static file server for local preview
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use repose::cmd;
//!
//! // Create a blog post in the project at the current directory
//! cmd::new::run(Path::new(""), None, &["blog".to_string(), "hello-world".to_string()]).unwrap();
//! ```

pub mod cmd;
pub mod server;

// Re-export core types for convenience
pub use repose_core::{Config, ContentCreator, CreatedContent, Session};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
