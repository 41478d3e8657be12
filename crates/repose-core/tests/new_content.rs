//! End-to-end tests for content creation in a scaffolded project.

use std::{cell::RefCell, ffi::OsStr, fs, io, io::Cursor, time::Duration};

use repose_core::{
    Config, ContentCreator, EditorStatus, Launcher, LinePrompt, Session, TemplateStatus,
    scaffold::create_project,
};

#[derive(Default)]
struct Recorder {
    programs: RefCell<Vec<String>>,
}

impl Launcher for Recorder {
    fn launch(&self, program: &str, _args: &[&OsStr]) -> io::Result<()> {
        self.programs.borrow_mut().push(program.to_string());
        Ok(())
    }

    fn open_url(&self, _url: &str) -> io::Result<()> {
        Ok(())
    }
}

fn new_project() -> (tempfile::TempDir, Config, Session) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut config = Config::default();
    config.site.author = "Sam".to_string();
    let session = Session::new(dir.path(), &config);
    create_project(&session, &config).expect("scaffold project");
    (dir, config, session)
}

#[test]
fn test_new_post_in_fresh_project() {
    let (dir, config, session) = new_project();
    let launcher = Recorder::default();
    let mut prompt = LinePrompt::new(Cursor::new("\n".to_string()), Vec::new());

    let created = ContentCreator::new(&config, &session, &mut prompt, &launcher)
        .with_editor_pause(Duration::ZERO)
        .create("blog", "my-first-post")
        .expect("create content");

    assert_eq!(created.path, dir.path().join("content/blog/my-first-post.md"));
    assert_eq!(created.title, "My First Post");
    assert_eq!(
        created.template,
        TemplateStatus::Created(dir.path().join("template/blog.tmpl"))
    );
    assert_eq!(created.editor, EditorStatus::Disabled);

    let body = fs::read_to_string(&created.path).expect("read content");
    assert!(body.contains("author: Sam"));

    let output = String::from_utf8(prompt.into_writer()).expect("utf8");
    assert!(output.contains("Created new blog"));
    assert!(output.contains("Do you want to create the template blog.tmpl? (Yes/no) "));
}

#[test]
fn test_builtin_template_is_found() {
    let (_dir, config, session) = new_project();
    let launcher = Recorder::default();
    let mut prompt = LinePrompt::new(Cursor::new(String::new()), Vec::new());

    let created = ContentCreator::new(&config, &session, &mut prompt, &launcher)
        .with_editor_pause(Duration::ZERO)
        .create("page", "about-us.html")
        .expect("create content");

    assert_eq!(created.template, TemplateStatus::Found);
    assert!(created.path.ends_with("page/about-us.html"));
    assert_eq!(created.title, "About Us");
}

#[test]
fn test_declined_template_then_editor() {
    let (dir, mut config, session) = new_project();
    config.editor.command = "nano".to_string();
    let launcher = Recorder::default();
    let mut prompt = LinePrompt::new(Cursor::new("no\n".to_string()), Vec::new());

    let created = ContentCreator::new(&config, &session, &mut prompt, &launcher)
        .with_editor_pause(Duration::ZERO)
        .create("blog/drafts", "draft1.html")
        .expect("create content");

    assert_eq!(created.content_type, "blog");
    assert!(created.path.ends_with("blog/drafts/draft1.html"));
    assert_eq!(created.template, TemplateStatus::Declined);
    assert!(!dir.path().join("template/blog.tmpl").exists());
    assert_eq!(created.editor, EditorStatus::Opened);
    assert_eq!(*launcher.programs.borrow(), vec!["nano".to_string()]);
}
