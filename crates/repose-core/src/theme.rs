//! Built-in theme templates.

/// Theme written by `init` when none is configured.
pub const DEFAULT_THEME: &str = "none";

const DEFAULT_TEMPLATE_NONE: &str = r#"<!-- default.tmpl -->
<article>
    <div>{{ .Content }}</div>
</article>
"#;

const PAGE_TEMPLATE_NONE: &str = r#"<!-- page.tmpl -->
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ .Title }}</title>
</head>
<body>
    {{ template "header.tmpl" . }}
    {{ template "navigation.tmpl" . }}
    <div class="main container">
        {{ template "default.tmpl" . }}
    </div>
    {{ template "footer.tmpl" . }}
</body>
</html>
"#;

const HEADER_TEMPLATE_NONE: &str = r#"<!-- header.tmpl -->
<header>
    <h1>Site Logo Here</h1>
    <h2>{{ .SiteName }}</h2>
</header>
"#;

const NAVIGATION_TEMPLATE_NONE: &str = r#"<!-- navigation.tmpl -->
<nav>
    <ul>
        <li><a href="/">Home</a></li>
        <li><a href="/about">About Us</a></li>
        <li><a href="/contact">Contact</a></li>
    </ul>
</nav>
"#;

const FOOTER_TEMPLATE_NONE: &str = r#"<!-- footer.tmpl -->
<footer>
    <p>&copy; Site Name. All rights reserved.</p>
</footer>
"#;

/// Template files shipped with a theme, as `(file name, body)` pairs.
pub fn builtin_templates(theme: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match theme {
        DEFAULT_THEME => Some(&[
            ("default.tmpl", DEFAULT_TEMPLATE_NONE),
            ("page.tmpl", PAGE_TEMPLATE_NONE),
            ("header.tmpl", HEADER_TEMPLATE_NONE),
            ("navigation.tmpl", NAVIGATION_TEMPLATE_NONE),
            ("footer.tmpl", FOOTER_TEMPLATE_NONE),
        ]),
        _ => None,
    }
}

/// Placeholder body for a generated per-type template.
pub fn placeholder_template(theme: &str) -> String {
    format!("DefaultTemplate_{theme}")
}
