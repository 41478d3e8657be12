//! Starting external programs: the editor and the browser.

use std::{
    ffi::OsStr,
    io,
    path::Path,
    process::{Command, Stdio},
    thread,
    time::Duration,
};

use crate::error::{CoreError, Result};

/// Pause before handing the terminal to another program, so earlier output settles.
pub const HANDOFF_PAUSE: Duration = Duration::from_millis(500);

/// Capability for running programs outside this process.
pub trait Launcher {
    /// Run `program` with `args`, sharing this process's standard streams,
    /// and wait for it to exit.
    fn launch(&self, program: &str, args: &[&OsStr]) -> io::Result<()>;

    /// Open `url` with the platform's default handler.
    fn open_url(&self, url: &str) -> io::Result<()>;
}

/// [`Launcher`] backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, program: &str, args: &[&OsStr]) -> io::Result<()> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("{program} exited with {status}")))
        }
    }

    fn open_url(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

/// Open `path` in `editor` after a short pause.
pub fn open_in_editor(
    launcher: &dyn Launcher,
    editor: &str,
    path: &Path,
    pause: Duration,
) -> Result<()> {
    tracing::info!(editor, path = %path.display(), "Opening file in editor");
    thread::sleep(pause);

    launcher
        .launch(editor, &[path.as_os_str()])
        .map_err(|e| CoreError::launch(editor, e))
}
