//! Filename normalization and title derivation for new content.

/// Markdown extension, also the fallback for anything unrecognised.
pub const MARKDOWN_EXT: &str = ".md";

/// HTML extension.
pub const HTML_EXT: &str = ".html";

/// A user-supplied filename together with its canonical form and title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName {
    raw: String,
    name: String,
    extension: &'static str,
    title: String,
}

impl FileName {
    /// Normalize a raw filename.
    ///
    /// Names ending in `.md` or `.html` are kept as they are. Anything else,
    /// including names with some other extension, gets `.md` appended, so
    /// `notes.txt` becomes `notes.txt.md` with the title `Notes.txt`.
    pub fn parse(raw: &str) -> Self {
        let (name, extension) = match extension_of(raw) {
            MARKDOWN_EXT => (raw.to_string(), MARKDOWN_EXT),
            HTML_EXT => (raw.to_string(), HTML_EXT),
            _ => (format!("{raw}{MARKDOWN_EXT}"), MARKDOWN_EXT),
        };

        let stem = &name[..name.len() - extension.len()];
        let title = title_case(&stem.replace(['-', '_'], " "));

        Self {
            raw: raw.to_string(),
            name,
            extension,
            title,
        }
    }

    /// The filename as typed by the user.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The filename with a supported extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The effective extension, including the leading dot.
    pub fn extension(&self) -> &'static str {
        self.extension
    }

    /// Human readable title derived from the stem.
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Extension of the last path element, starting at its final dot.
fn extension_of(name: &str) -> &str {
    let start = name.rfind(std::path::is_separator).map_or(0, |i| i + 1);
    match name[start..].rfind('.') {
        Some(dot) => &name[start + dot..],
        None => "",
    }
}

/// Capitalize the first letter of every whitespace separated word.
///
/// The rest of each word keeps its case and whitespace is preserved.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;

    for ch in text.chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else {
            out.push(ch);
        }
    }

    out
}
