//! Response Formatting
//!
//! Turns raw completion text into HTML safe to insert into the chat page.
//! Markdown conversion runs first, then three textual passes over the
//! HTML wrap and annotate hyperlinks. The passes deliberately avoid a
//! DOM parse; each one applies leftmost-first and non-overlapping, and
//! the final annotation pass is idempotent.

use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use regex::{Captures, Regex};

lazy_static! {
    /// Literal `[label](url)` syntax that survived Markdown conversion.
    static ref MARKDOWN_LINK: Regex =
        Regex::new(r"\[([^\]]+)\]\((https?://[^\s)]+)\)").unwrap();

    /// Bare-URL pass. The alternation lets a single leftmost-first scan
    /// skip whole anchor elements and other tags while matching URLs
    /// still sitting in plain text.
    static ref BARE_URL: Regex =
        Regex::new(r"(?s)<a\s[^>]*>.*?</a>|<[^>]+>|https?://[^\s<]+").unwrap();

    /// Anchor opening tags, annotated or not.
    static ref ANCHOR_OPEN: Regex = Regex::new(r"<a\s[^>]*>").unwrap();

    /// Quoted attribute values, blanked out before looking for a
    /// `target` attribute so a `target=` inside an href URL never
    /// counts as one.
    static ref QUOTED_VALUE: Regex = Regex::new(r#""[^"]*"|'[^']*'"#).unwrap();

    /// A `target` attribute position in an opening tag.
    static ref TARGET_ATTR: Regex = Regex::new(r"\starget\s*=").unwrap();
}

/// Whether an anchor opening tag already carries a `target` attribute.
fn has_target_attr(tag: &str) -> bool {
    let stripped = QUOTED_VALUE.replace_all(tag, r#""""#);
    TARGET_ATTR.is_match(&stripped)
}

/// Render completion output as link-annotated HTML.
///
/// Every hyperlink in the result opens in a new browsing context, whether
/// it arrived as Markdown link syntax, as a bare URL, or as an anchor
/// produced by the Markdown converter itself.
pub fn format_response(raw: &str) -> String {
    let html = render_markdown(raw);
    let html = link_markdown_syntax(&html);
    let html = link_bare_urls(&html);
    let html = open_links_in_new_tab(&html);
    html.trim_end().to_string()
}

fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Convert `[label](url)` occurrences the Markdown converter left as
/// literal text (inside HTML blocks, for example) into anchors.
fn link_markdown_syntax(html: &str) -> String {
    MARKDOWN_LINK
        .replace_all(html, r#"<a href="$2" target="_blank">$1</a>"#)
        .into_owned()
}

/// Wrap bare `http(s)://` URLs in self-targeting anchors, leaving
/// existing anchors and tag attributes untouched.
fn link_bare_urls(html: &str) -> String {
    BARE_URL
        .replace_all(html, |caps: &Captures<'_>| {
            let matched = &caps[0];
            if matched.starts_with('<') {
                matched.to_string()
            } else {
                format!(r#"<a href="{matched}" target="_blank">{matched}</a>"#)
            }
        })
        .into_owned()
}

/// Annotate every anchor opening tag that lacks a `target` attribute.
/// Idempotent: already-annotated anchors pass through unchanged.
fn open_links_in_new_tab(html: &str) -> String {
    ANCHOR_OPEN
        .replace_all(html, |caps: &Captures<'_>| {
            let tag = &caps[0];
            if has_target_attr(tag) {
                tag.to_string()
            } else {
                format!(r#"{} target="_blank">"#, &tag[..tag.len() - 1])
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_paragraph_exact_output() {
        assert_eq!(
            format_response("Games start at **6 PM**."),
            "<p>Games start at <strong>6 PM</strong>.</p>"
        );
    }

    #[test]
    fn test_heading_and_list_conversion() {
        let html = format_response("# Schedule\n\n- U8 at 9 AM\n- U10 at 10 AM");
        assert!(html.contains("<h1>Schedule</h1>"));
        assert!(html.contains("<li>U8 at 9 AM</li>"));
        assert!(html.contains("<li>U10 at 10 AM</li>"));
    }

    #[test]
    fn test_markdown_link_becomes_single_annotated_anchor() {
        let html = format_response("See [Example](https://example.com) for details.");
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains(r#"<a href="https://example.com" target="_blank">Example</a>"#));
        // The URL must not be wrapped a second time as a bare URL.
        assert_eq!(html.matches("https://example.com").count(), 1);
    }

    #[test]
    fn test_bare_url_wrapped_exactly_once() {
        let html = format_response("Fields map: https://example.com/path today.");
        assert_eq!(
            html,
            r#"<p>Fields map: <a href="https://example.com/path" target="_blank">https://example.com/path</a> today.</p>"#
        );
    }

    #[test]
    fn test_two_bare_urls_wrap_independently() {
        let html = format_response("http://a.example/x and https://b.example/y");
        assert!(html.contains(r#"<a href="http://a.example/x" target="_blank">http://a.example/x</a>"#));
        assert!(html.contains(r#"<a href="https://b.example/y" target="_blank">https://b.example/y</a>"#));
    }

    #[test]
    fn test_url_inside_anchor_is_not_rewrapped() {
        let html = r#"<p><a href="https://example.com">https://example.com</a></p>"#;
        let once = link_bare_urls(html);
        assert_eq!(once, html);
    }

    #[test]
    fn test_annotation_pass_is_idempotent() {
        let html = format_response("Check [Rules](https://example.com/rules) and https://example.org.");
        let again = open_links_in_new_tab(&html);
        assert_eq!(html, again);
    }

    #[test]
    fn test_target_in_query_string_does_not_suppress_annotation() {
        let html = format_response("[Standings](https://example.com/table?target=web)");
        assert!(html.contains(
            r#"<a href="https://example.com/table?target=web" target="_blank">Standings</a>"#
        ));
    }

    #[test]
    fn test_annotation_idempotent_with_target_in_query() {
        let html = format_response("[Standings](https://example.com/table?target=web)");
        assert_eq!(open_links_in_new_tab(&html), html);
        assert_eq!(html.matches(r#"target="_blank""#).count(), 1);
    }

    #[test]
    fn test_annotation_never_duplicates_target() {
        let annotated = open_links_in_new_tab(r#"<a href="https://example.com" target="_blank">x</a>"#);
        assert_eq!(annotated.matches("target=").count(), 1);
    }

    #[test]
    fn test_plain_text_passes_through_as_paragraph() {
        assert_eq!(format_response("No links here."), "<p>No links here.</p>");
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let html = format_response("Done.\n\n");
        assert_eq!(html, "<p>Done.</p>");
    }
}
