//! The minifier boundary. Runs once per build on the name-resolved
//! template; `LANG_` tokens pass through it untouched.

use minify_html::Cfg;

/// Literal the author writes where a space must survive minification.
pub const SPACE_MARKER: &str = "[:SPACE:]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyOptions {
    pub remove_comments: bool,
    pub minify_css: bool,
    pub minify_js: bool,
    /// Keep `<html>`, `<head>` and `<body>` even where they are optional.
    pub keep_document_tags: bool,
    pub keep_closing_tags: bool,
    /// Leave `<!DOCTYPE html>` as written instead of shortening it.
    pub keep_full_doctype: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            remove_comments: true,
            minify_css: true,
            minify_js: true,
            keep_document_tags: true,
            keep_closing_tags: true,
            keep_full_doctype: true,
        }
    }
}

/// A pure `html -> html` transform.
pub trait Minifier: Sync {
    fn minify(&self, html: &str) -> String;
}

/// Backed by `minify-html`; whitespace is always collapsed.
#[derive(Debug, Clone, Default)]
pub struct HtmlMinifier {
    pub options: MinifyOptions,
}

impl HtmlMinifier {
    pub fn new(options: MinifyOptions) -> Self {
        Self { options }
    }

    fn cfg(&self) -> Cfg {
        let mut cfg = Cfg::new();
        cfg.keep_comments = !self.options.remove_comments;
        cfg.minify_css = self.options.minify_css;
        cfg.minify_js = self.options.minify_js;
        cfg.keep_html_and_head_opening_tags = self.options.keep_document_tags;
        cfg.keep_closing_tags = self.options.keep_closing_tags;
        cfg.do_not_minify_doctype = self.options.keep_full_doctype;
        cfg
    }
}

impl Minifier for HtmlMinifier {
    fn minify(&self, html: &str) -> String {
        let out = minify_html::minify(html.as_bytes(), &self.cfg());
        String::from_utf8_lossy(&out).into_owned()
    }
}

/// Passes documents through unchanged (`--no-minify`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Minifier for Identity {
    fn minify(&self, html: &str) -> String {
        html.to_string()
    }
}

/// Minify, then turn every [`SPACE_MARKER`] into a plain space.
pub fn minify_document(minifier: &dyn Minifier, html: &str) -> String {
    minifier.minify(html).replace(SPACE_MARKER, " ")
}
