//! Per content type render templates.
//!
//! Every content type is rendered with a `<label>.tmpl` file found anywhere
//! below the template directory. When a new piece of content has no template
//! yet, the operator is offered a generated one.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::{
    error::{CoreError, Result},
    fs,
    prompt::{Prompt, announce, confirm},
    theme,
};

/// File extension of render templates.
pub const TEMPLATE_EXT: &str = "tmpl";

/// What happened while looking for a content type's template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateStatus {
    /// A template already exists somewhere in the template tree.
    Found,
    /// A placeholder template was written to the given path.
    Created(PathBuf),
    /// The operator chose not to create a template.
    Declined,
    /// Searching, prompting or writing failed; the failure has been logged.
    Failed,
}

/// Looks up and provisions templates below a template root.
#[derive(Debug, Clone)]
pub struct TemplateResolver<'a> {
    root: &'a Path,
    theme: &'a str,
}

impl<'a> TemplateResolver<'a> {
    /// Create a resolver for the template directory and configured theme.
    pub fn new(root: &'a Path, theme: &'a str) -> Self {
        Self { root, theme }
    }

    /// Template file name for a content type label.
    pub fn template_name(label: &str) -> String {
        format!("{label}.{TEMPLATE_EXT}")
    }

    /// Whether `<label>.tmpl` exists anywhere under the template root.
    pub fn exists(&self, label: &str) -> Result<bool> {
        fs::exists_recursive(&Self::template_name(label), self.root).map_err(|source| {
            CoreError::TemplateSearch {
                root: self.root.to_path_buf(),
                source,
            }
        })
    }

    /// Write the theme placeholder template for `label` at the top of the root.
    pub fn create(&self, label: &str) -> Result<PathBuf> {
        let path = self.root.join(Self::template_name(label));
        let body = theme::placeholder_template(self.theme);
        fs::create(&path, &body).map_err(|e| CoreError::create(&path, e))?;
        Ok(path)
    }

    /// Make sure a template for `label` exists, asking before creating one.
    ///
    /// Never fails: problems are logged and reported as [`TemplateStatus::Failed`].
    pub fn resolve(&self, label: &str, prompt: &mut dyn Prompt) -> TemplateStatus {
        let name = Self::template_name(label);

        match self.exists(label) {
            Ok(true) => return TemplateStatus::Found,
            Ok(false) => {}
            Err(e) => {
                error!("Error searching for template: {e}");
                return TemplateStatus::Failed;
            }
        }

        warn!("Template file not found: {name}");
        let question = format!("Do you want to create the template {name}?");
        let accepted = match confirm(prompt, &question) {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("{}", CoreError::Prompt(e));
                return TemplateStatus::Failed;
            }
        };

        if !accepted {
            info!(template = %name, "Template creation declined");
            return TemplateStatus::Declined;
        }

        info!("Creating template file: {name}");
        match self.create(label) {
            Ok(path) => {
                announce(prompt, &format!("  ✓ Template created: {}", path.display()));
                TemplateStatus::Created(path)
            }
            Err(e) => {
                error!("Error creating template: {e}");
                TemplateStatus::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::prompt::LinePrompt;

    fn prompt(input: &str) -> LinePrompt<Cursor<String>, Vec<u8>> {
        LinePrompt::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn test_found_in_nested_directory_without_prompting() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("partials/blog")).expect("mkdir");
        std::fs::write(dir.path().join("partials/blog/blog.tmpl"), "x").expect("write");

        let resolver = TemplateResolver::new(dir.path(), "none");
        let mut prompt = prompt("");

        assert_eq!(resolver.resolve("blog", &mut prompt), TemplateStatus::Found);
        assert!(prompt.into_writer().is_empty());
    }

    #[test]
    fn test_empty_answer_creates_placeholder() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("template");
        let resolver = TemplateResolver::new(&root, "none");
        let mut prompt = prompt("\n");

        let status = resolver.resolve("blog", &mut prompt);

        let expected = root.join("blog.tmpl");
        assert_eq!(status, TemplateStatus::Created(expected.clone()));
        assert_eq!(
            std::fs::read_to_string(expected).expect("read"),
            "DefaultTemplate_none"
        );
        let output = String::from_utf8(prompt.into_writer()).expect("utf8");
        assert!(output.starts_with("Do you want to create the template blog.tmpl? (Yes/no) "));
    }

    #[test]
    fn test_no_declines() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let resolver = TemplateResolver::new(dir.path(), "none");

        let status = resolver.resolve("blog", &mut prompt("no\n"));

        assert_eq!(status, TemplateStatus::Declined);
        assert!(!dir.path().join("blog.tmpl").exists());
    }

    #[test]
    fn test_closed_input_is_absorbed() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let resolver = TemplateResolver::new(dir.path(), "none");

        assert_eq!(resolver.resolve("blog", &mut prompt("")), TemplateStatus::Failed);
        assert!(!dir.path().join("blog.tmpl").exists());
    }

    #[test]
    fn test_write_failure_is_absorbed() {
        let dir = tempfile::tempdir().expect("create temp dir");
        // A regular file where the template directory should be.
        let root = dir.path().join("template");
        std::fs::write(&root, "not a directory").expect("write");

        let resolver = TemplateResolver::new(&root, "none");
        assert_eq!(resolver.resolve("blog", &mut prompt("yes\n")), TemplateStatus::Failed);
    }

    #[cfg(unix)]
    #[test]
    fn test_search_failure_skips_offer() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("create temp dir");
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).expect("mkdir");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000))
            .expect("chmod");

        // Permission bits do not stop root.
        if std::fs::read_dir(&locked).is_ok() {
            std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))
                .expect("chmod");
            return;
        }

        let resolver = TemplateResolver::new(dir.path(), "none");
        assert!(matches!(
            resolver.exists("blog"),
            Err(CoreError::TemplateSearch { .. })
        ));

        let mut prompt = prompt("yes\n");
        let status = resolver.resolve("blog", &mut prompt);

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))
            .expect("chmod");

        assert_eq!(status, TemplateStatus::Failed);
        assert!(prompt.into_writer().is_empty());
        assert!(!dir.path().join("blog.tmpl").exists());
    }

    #[test]
    fn test_placeholder_uses_theme() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let resolver = TemplateResolver::new(dir.path(), "dark");

        let path = resolver.create("page").expect("create");
        assert_eq!(
            std::fs::read_to_string(path).expect("read"),
            "DefaultTemplate_dark"
        );
    }
}
