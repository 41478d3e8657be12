//! Repose CLI
//!
//! Scaffolds static site projects, creates content and serves a local preview.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Repose.
#[derive(Parser)]
#[command(
    name = "repose",
    version,
    about = "A small static site authoring tool"
)]
struct Cli {
    /// Project root directory (defaults to the current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Path to configuration file (defaults to <root>/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Create a new project with starter templates
    Init,
    /// Create new content: repose new [CONTENTTYPE] [FILENAME]
    New {
        /// Content type (optionally with subfolders, e.g. blog/drafts) and filename
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Copy content and static files into the output directory
    Build,
    /// Serve the output directory for local preview
    Preview {
        /// Port to listen on (defaults to preview.port from the config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Do not open a browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    repose::init_tracing(cli.verbose);

    let root = cli.root.unwrap_or_default();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Init => {
            repose::cmd::init::run(&root)?;
        }
        Commands::New { args } => {
            repose::cmd::new::run(&root, config, &args)?;
        }
        Commands::Build => {
            repose::cmd::build::run(&root, config)?;
        }
        Commands::Preview { port, no_open } => {
            repose::cmd::preview::run(&root, config, port, !no_open).await?;
        }
    }

    Ok(())
}
