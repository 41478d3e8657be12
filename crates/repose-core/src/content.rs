//! Content types and the default body written into new content files.

use std::path::{Path, PathBuf};

use crate::template::TemplateResolver;

/// Separator between the content type and any nested subfolder.
const TYPE_SEPARATOR: char = '/';

/// Placeholder replaced by the content title.
pub const TITLE_TOKEN: &str = "{title}";

/// Placeholder replaced by the content type label.
pub const CONTENT_TYPE_TOKEN: &str = "{contentType}";

/// Placeholder replaced by the configured author.
pub const AUTHOR_TOKEN: &str = "{author}";

/// Body used for every new content file.
pub const NEW_CONTENT_TEMPLATE: &str = r#"---
title: "{title}"
type: {contentType}
author: {author}
draft: true
---

# {title}

Write your {contentType} here.
"#;

/// Content type argument, e.g. `blog` or `blog/drafts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeSpec {
    type_dir: String,
    label_len: usize,
}

impl ContentTypeSpec {
    /// Split a type directory on its first separator.
    pub fn parse(type_dir: &str) -> Self {
        let label_len = type_dir.find(TYPE_SEPARATOR).unwrap_or(type_dir.len());
        Self {
            type_dir: type_dir.to_string(),
            label_len,
        }
    }

    /// The full type directory, subfolders included.
    pub fn type_dir(&self) -> &str {
        &self.type_dir
    }

    /// The content type label: everything before the first separator.
    pub fn label(&self) -> &str {
        &self.type_dir[..self.label_len]
    }

    /// The nested part after the label, if any.
    pub fn subpath(&self) -> Option<&str> {
        self.type_dir
            .get(self.label_len + TYPE_SEPARATOR.len_utf8()..)
            .filter(|rest| !rest.is_empty())
    }

    /// Name of the render template for this content type.
    pub fn template_name(&self) -> String {
        TemplateResolver::template_name(self.label())
    }

    /// Directory the content file is written to.
    pub fn destination_dir(&self, content_dir: &Path) -> PathBuf {
        content_dir.join(&self.type_dir)
    }
}

/// Renders the body of a new content file.
#[derive(Debug, Clone)]
pub struct ContentRenderer {
    template: String,
    author: String,
}

impl ContentRenderer {
    /// Renderer using the built-in content template.
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            template: NEW_CONTENT_TEMPLATE.to_string(),
            author: author.into(),
        }
    }

    /// Replace the content template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Substitute every title, content type and author placeholder.
    pub fn render(&self, content_type: &str, title: &str) -> String {
        self.template
            .replace(TITLE_TOKEN, title)
            .replace(CONTENT_TYPE_TOKEN, content_type)
            .replace(AUTHOR_TOKEN, &self.author)
    }
}
