//! New content creation.
//!
//! Turns a content type and a raw filename into a content file under the
//! content directory, then makes sure the content type has a render template
//! and optionally opens the file in the configured editor. Only writing the
//! content file can fail the operation; the later steps log their problems
//! and report them through [`CreatedContent`].

use std::{path::PathBuf, time::Duration};

use tracing::{error, info};

use crate::{
    config::Config,
    content::{ContentRenderer, ContentTypeSpec},
    error::{CoreError, Result},
    filename::FileName,
    fs,
    launcher::{HANDOFF_PAUSE, Launcher, open_in_editor},
    prompt::{Prompt, announce},
    session::Session,
    template::{TemplateResolver, TemplateStatus},
};

/// Whether the new file was opened in an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorStatus {
    /// No editor configured, or set to `none`.
    Disabled,
    /// The editor ran and exited successfully.
    Opened,
    /// The editor could not be started or exited with an error.
    Failed,
}

/// Result of a successful content creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedContent {
    /// Path of the new content file.
    pub path: PathBuf,
    /// Content type label, e.g. `blog` for `blog/drafts`.
    pub content_type: String,
    /// Title written into the file.
    pub title: String,
    /// Outcome of the template lookup.
    pub template: TemplateStatus,
    /// Outcome of the editor launch.
    pub editor: EditorStatus,
}

/// Creates content files for one invocation.
pub struct ContentCreator<'a> {
    config: &'a Config,
    session: &'a Session,
    prompt: &'a mut dyn Prompt,
    launcher: &'a dyn Launcher,
    editor_pause: Duration,
}

impl<'a> ContentCreator<'a> {
    pub fn new(
        config: &'a Config,
        session: &'a Session,
        prompt: &'a mut dyn Prompt,
        launcher: &'a dyn Launcher,
    ) -> Self {
        Self {
            config,
            session,
            prompt,
            launcher,
            editor_pause: HANDOFF_PAUSE,
        }
    }

    /// Override the pause before the editor starts.
    #[must_use]
    pub fn with_editor_pause(mut self, pause: Duration) -> Self {
        self.editor_pause = pause;
        self
    }

    /// Create `file_name` under the `type_dir` content directory.
    ///
    /// `type_dir` may contain subfolders (`blog/drafts`); its first segment is
    /// the content type.
    pub fn create(&mut self, type_dir: &str, file_name: &str) -> Result<CreatedContent> {
        let file_name = FileName::parse(file_name);
        let content_type = ContentTypeSpec::parse(type_dir);
        let label = content_type.label();

        info!(
            content_type = label,
            content_dir = %self.session.content_dir().display(),
            "Creating new content"
        );
        let path = content_type
            .destination_dir(self.session.content_dir())
            .join(file_name.name());

        let body = ContentRenderer::new(&self.config.site.author).render(label, file_name.title());

        fs::create(&path, &body).map_err(|e| CoreError::create(&path, e))?;

        info!(path = %path.display(), "Created content file");
        announce(
            &mut *self.prompt,
            &format!("  ✓ Created new {label}: {}", path.display()),
        );

        let template = TemplateResolver::new(self.session.template_dir(), &self.config.site.theme)
            .resolve(label, &mut *self.prompt);

        let editor = match self.config.editor.program() {
            None => EditorStatus::Disabled,
            Some(editor) => {
                announce(&mut *self.prompt, &format!("  Opening file in editor: {editor}"));
                match open_in_editor(self.launcher, editor, &path, self.editor_pause) {
                    Ok(()) => EditorStatus::Opened,
                    Err(e) => {
                        error!("Failed to open file in editor: {e}");
                        EditorStatus::Failed
                    }
                }
            }
        };

        Ok(CreatedContent {
            path,
            content_type: label.to_string(),
            title: file_name.title().to_string(),
            template,
            editor,
        })
    }
}
