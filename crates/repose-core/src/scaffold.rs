//! New project scaffolding.

use std::{fs, path::PathBuf};

use tracing::info;

use crate::{
    config::Config,
    content::ContentRenderer,
    error::{CoreError, Result},
    fs as repose_fs,
    session::Session,
    theme,
};

/// Create the directories and starter files of a new project.
///
/// Refuses to touch a root that already has a configuration file. Returns the
/// files that were written.
pub fn create_project(session: &Session, config: &Config) -> Result<Vec<PathBuf>> {
    let config_file = Session::config_file(session.root());
    if repose_fs::exists(&config_file) {
        return Err(CoreError::ProjectExists(config_file));
    }

    info!(root = %session.root().display(), "Creating project structure");

    for dir in [
        session.content_dir().to_path_buf(),
        session.output_dir().to_path_buf(),
        session.template_dir().to_path_buf(),
        session.static_dir(),
    ] {
        fs::create_dir_all(&dir)?;
    }

    let mut files = vec![(config_file, config.to_toml()?)];

    if let Some(templates) = theme::builtin_templates(&config.site.theme) {
        files.extend(
            templates
                .iter()
                .map(|(name, body)| (session.template_dir().join(name), (*body).to_string())),
        );
    } else {
        tracing::warn!(theme = %config.site.theme, "Unknown theme, no templates written");
    }

    files.push((
        session.content_dir().join("index.md"),
        ContentRenderer::new(&config.site.author).render("page", "Home"),
    ));

    let mut written = Vec::with_capacity(files.len());
    for (path, body) in files {
        repose_fs::create(&path, &body).map_err(|e| CoreError::create(&path, e))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_layout() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = Config::default();
        let session = Session::new(dir.path(), &config);

        let written = create_project(&session, &config).expect("scaffold");

        assert!(dir.path().join("config.toml").is_file());
        assert!(session.content_dir().join("index.md").is_file());
        assert!(session.output_dir().is_dir());
        assert!(session.static_dir().is_dir());
        for name in ["default.tmpl", "page.tmpl", "header.tmpl", "navigation.tmpl", "footer.tmpl"] {
            assert!(session.template_dir().join(name).is_file(), "{name} missing");
        }
        assert_eq!(written.len(), 7);

        let loaded = Config::load(&dir.path().join("config.toml")).expect("load");
        assert_eq!(loaded.site.title, config.site.title);
    }

    #[test]
    fn test_refuses_existing_project() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("config.toml"), "[site]\ntitle = \"Mine\"\n").expect("write");
        let config = Config::default();
        let session = Session::new(dir.path(), &config);

        let err = create_project(&session, &config).unwrap_err();

        assert!(matches!(err, CoreError::ProjectExists(_)));
        assert!(!session.content_dir().exists());
    }

    #[test]
    fn test_unknown_theme_still_scaffolds() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = Config::default();
        config.site.theme = "custom".to_string();
        let session = Session::new(dir.path(), &config);

        let written = create_project(&session, &config).expect("scaffold");

        assert_eq!(written.len(), 2);
        assert!(session.template_dir().is_dir());
    }
}
