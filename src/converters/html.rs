//! Semantic page renderer.
//!
//! Renders one page's block/line/run structure to an HTML fragment:
//! one `<p>` per block, `<br>` between lines, styled runs wrapped in
//! `<span>` elements that either reference a shared CSS class or carry the
//! style inline, depending on the render mode.

use crate::converters::RenderOptions;
use crate::layout::{Block, TextRun};
use crate::style::{ResolvedStyle, StyleRegistry};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for matching URLs in text
    static ref RE_URL: Regex = Regex::new(r"https?://[^\s<>()]+").unwrap();

    /// Regex for matching email addresses
    static ref RE_EMAIL: Regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
}

/// Renderer for one page of extracted content.
///
/// Performs no I/O and raises no errors: a malformed style attribute on a
/// run degrades that run to unstyled plain text, never failing the page.
///
/// # Examples
///
/// ```
/// use pdf2html::converters::{HtmlConverter, RenderOptions};
/// use pdf2html::layout::{Block, TextRun};
/// use pdf2html::style::StyleRegistry;
///
/// let converter = HtmlConverter::new();
/// let mut registry = StyleRegistry::new();
/// let blocks = vec![Block::from_runs(vec![TextRun::plain("Hello")])];
///
/// let fragment =
///     converter.render_page(1, &blocks, &RenderOptions::default(), &mut registry);
/// assert_eq!(fragment, "<section data-page=\"1\"><p>Hello</p></section>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlConverter;

impl HtmlConverter {
    /// Create a new page renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render one page to an HTML fragment.
    ///
    /// `page_number` is the page's 1-based index; it is carried on the
    /// page's `<section data-page="…">` container so downstream consumers
    /// can find page boundaries without re-parsing.
    ///
    /// In class mode every distinct style is interned into `registry`;
    /// the registry must be the document-wide instance so identical styles
    /// on different pages collapse to one class. In inline mode the
    /// registry is not touched.
    pub fn render_page(
        &self,
        page_number: usize,
        blocks: &[Block],
        options: &RenderOptions,
        registry: &mut StyleRegistry,
    ) -> String {
        let mut html = format!("<section data-page=\"{}\">", page_number);

        for block in blocks {
            let mut rendered_lines = Vec::new();
            for line in &block.lines {
                let mut rendered = String::new();
                for run in &line.runs {
                    if run.text.is_empty() {
                        continue;
                    }
                    rendered.push_str(&self.render_run(run, options, registry));
                }
                if !rendered.is_empty() {
                    rendered_lines.push(rendered);
                }
            }
            if rendered_lines.is_empty() {
                continue;
            }
            html.push_str("<p>");
            html.push_str(&rendered_lines.join("<br>"));
            html.push_str("</p>");
        }

        html.push_str("</section>");
        html
    }

    /// Render a single non-empty run, wrapping it in a style marker when
    /// its canonical style is non-empty.
    fn render_run(
        &self,
        run: &TextRun,
        options: &RenderOptions,
        registry: &mut StyleRegistry,
    ) -> String {
        let text = if options.inject_links {
            linkify_urls_and_emails(&run.text)
        } else {
            escape_html(&run.text)
        };

        match ResolvedStyle::resolve(run, options).canonical_key() {
            None => text,
            Some(key) => {
                if options.use_css_classes {
                    let class_id = registry.intern(&key);
                    format!("<span class=\"{}\">{}</span>", class_id, text)
                } else {
                    format!("<span style=\"{}\">{}</span>", key, text)
                }
            }
        }
    }
}

/// Escape HTML special characters.
///
/// Replaces &, <, >, ", and ' with their HTML entity equivalents.
///
/// # Examples
///
/// ```
/// # use pdf2html::converters::escape_html;
/// assert_eq!(escape_html("AT&T <Company>"), "AT&amp;T &lt;Company&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Escape text, then convert URLs and e-mail addresses to hyperlinks.
///
/// URLs (`http://`, `https://`) become `<a href="…">` tags and e-mail
/// addresses become `<a href="mailto:…">` tags.
pub fn linkify_urls_and_emails(text: &str) -> String {
    let escaped = escape_html(text);

    let with_urls = RE_URL.replace_all(&escaped, |caps: &regex::Captures| {
        let url = &caps[0];
        format!(r#"<a href="{}">{}</a>"#, url, url)
    });

    let with_emails = RE_EMAIL.replace_all(&with_urls, |caps: &regex::Captures| {
        let email = &caps[0];
        format!(r#"<a href="mailto:{}">{}</a>"#, email, email)
    });

    with_emails.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Line, RunColor, TextRun};

    fn red_bold(text: &str) -> TextRun {
        TextRun::plain(text)
            .with_color(RunColor::Packed(0xff0000))
            .with_font("Helvetica-Bold")
    }

    fn options() -> RenderOptions {
        RenderOptions {
            inject_links: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Hello"), "Hello");
        assert_eq!(escape_html("AT&T"), "AT&amp;T");
        assert_eq!(escape_html("<div>"), "&lt;div&gt;");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("'apostrophe'"), "&#x27;apostrophe&#x27;");
        assert_eq!(escape_html("<b>&\"'</b>"), "&lt;b&gt;&amp;&quot;&#x27;&lt;/b&gt;");
    }

    #[test]
    fn test_empty_page() {
        let converter = HtmlConverter::new();
        let mut registry = StyleRegistry::new();
        let fragment = converter.render_page(3, &[], &options(), &mut registry);
        assert_eq!(fragment, "<section data-page=\"3\"></section>");
    }

    #[test]
    fn test_page_container_carries_page_number() {
        let converter = HtmlConverter::new();
        let mut registry = StyleRegistry::new();
        let blocks = vec![Block::from_runs(vec![TextRun::plain("x")])];
        let fragment = converter.render_page(42, &blocks, &options(), &mut registry);
        assert!(fragment.starts_with("<section data-page=\"42\">"));
        assert!(fragment.ends_with("</section>"));
    }

    #[test]
    fn test_unstyled_run_is_unwrapped() {
        let converter = HtmlConverter::new();
        let mut registry = StyleRegistry::new();
        let blocks = vec![Block::from_runs(vec![TextRun::plain("plain")])];
        let fragment = converter.render_page(1, &blocks, &options(), &mut registry);
        assert_eq!(fragment, "<section data-page=\"1\"><p>plain</p></section>");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_styled_run_class_mode() {
        let converter = HtmlConverter::new();
        let mut registry = StyleRegistry::new();
        let blocks = vec![Block::from_runs(vec![red_bold("warning")])];
        let fragment = converter.render_page(1, &blocks, &options(), &mut registry);
        assert!(fragment.contains("<span class=\"s0\">warning</span>"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_styled_run_inline_mode() {
        let converter = HtmlConverter::new();
        let mut registry = StyleRegistry::new();
        let opts = options().with_css_classes(false);
        let blocks = vec![Block::from_runs(vec![red_bold("warning")])];
        let fragment = converter.render_page(1, &blocks, &opts, &mut registry);
        assert!(
            fragment.contains("<span style=\"color:#ff0000;font-weight:bold\">warning</span>")
        );
        // Inline mode bypasses the registry entirely.
        assert!(registry.is_empty());
    }

    #[test]
    fn test_repeated_style_shares_class() {
        let converter = HtmlConverter::new();
        let mut registry = StyleRegistry::new();
        let blocks = vec![
            Block::from_runs(vec![red_bold("first")]),
            Block::from_runs(vec![red_bold("second")]),
        ];
        let fragment = converter.render_page(1, &blocks, &options(), &mut registry);
        assert_eq!(fragment.matches("class=\"s0\"").count(), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_runs_skipped() {
        let converter = HtmlConverter::new();
        let mut registry = StyleRegistry::new();
        let blocks = vec![Block::from_runs(vec![
            red_bold(""),
            TextRun::plain("kept"),
        ])];
        let fragment = converter.render_page(1, &blocks, &options(), &mut registry);
        assert_eq!(fragment, "<section data-page=\"1\"><p>kept</p></section>");
        // The empty styled run must not have interned anything.
        assert!(registry.is_empty());
    }

    #[test]
    fn test_blocks_without_content_skipped() {
        let converter = HtmlConverter::new();
        let mut registry = StyleRegistry::new();
        let blocks = vec![
            Block::from_runs(vec![TextRun::plain("")]),
            Block::default(),
            Block::from_runs(vec![TextRun::plain("only")]),
        ];
        let fragment = converter.render_page(1, &blocks, &options(), &mut registry);
        assert_eq!(fragment.matches("<p>").count(), 1);
    }

    #[test]
    fn test_line_breaks_within_block() {
        let converter = HtmlConverter::new();
        let mut registry = StyleRegistry::new();
        let blocks = vec![Block::new(vec![
            Line::new(vec![TextRun::plain("first line")]),
            Line::new(vec![TextRun::plain("second line")]),
        ])];
        let fragment = converter.render_page(1, &blocks, &options(), &mut registry);
        assert!(fragment.contains("first line<br>second line"));
    }

    #[test]
    fn test_escaping_before_wrapping() {
        let converter = HtmlConverter::new();
        let mut registry = StyleRegistry::new();
        let blocks = vec![Block::from_runs(vec![red_bold("a < b & c")])];
        let fragment = converter.render_page(1, &blocks, &options(), &mut registry);
        assert!(fragment.contains("<span class=\"s0\">a &lt; b &amp; c</span>"));
    }

    #[test]
    fn test_linkify() {
        let linked = linkify_urls_and_emails("Visit https://example.com or mail a@b.org");
        assert!(linked.contains(r#"<a href="https://example.com">"#));
        assert!(linked.contains(r#"<a href="mailto:a@b.org">"#));
    }

    #[test]
    fn test_inject_links_option() {
        let converter = HtmlConverter::new();
        let mut registry = StyleRegistry::new();
        let opts = options().with_link_injection(true);
        let blocks = vec![Block::from_runs(vec![TextRun::plain(
            "see https://example.com",
        )])];
        let fragment = converter.render_page(1, &blocks, &opts, &mut registry);
        assert!(fragment.contains(r#"<a href="https://example.com">"#));
    }
}
