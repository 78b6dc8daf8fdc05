use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Link and image targets allowed through to the page.
const ALLOWED_SCHEMES: &[&str] = &["http://", "https://", "mailto:"];

/// Replacement target for anything not on the allow list.
const INERT_URL: &str = "#";

/// Render article Markdown to HTML for the blog view.
///
/// Raw HTML in the source is emitted as escaped text rather than markup, and
/// link or image targets outside http(s) and mailto are replaced with `#`.
pub fn render(text: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lowered = url.trim().to_ascii_lowercase();
    if ALLOWED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        url
    } else {
        CowStr::Borrowed(INERT_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_emphasis() {
        let out = render("## Introduction\n\nSome **bold** text");
        assert!(out.contains("<h2>Introduction</h2>"));
        assert!(out.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let out = render("<script>alert(1)</script>\n\ninline <b>tag</b>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn test_web_links_are_kept() {
        let out = render("[docs](https://doc.rust-lang.org) and [mail](mailto:a@b.c)");
        assert!(out.contains(r#"<a href="https://doc.rust-lang.org">docs</a>"#));
        assert!(out.contains(r#"<a href="mailto:a@b.c">mail</a>"#));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let out = render("[click me](javascript:alert(document.cookie)) [x](JavaScript:void(0))");
        assert!(!out.to_ascii_lowercase().contains("javascript:"));
        assert!(out.contains("<a href=\"#\">click me</a>"));
    }

    #[test]
    fn test_image_and_relative_targets_are_neutralized() {
        let out = render("![pic](data:image/png;base64,AAAA)\n\n[up](../admin)");
        assert!(!out.contains("data:"));
        assert!(!out.contains("../admin"));
        assert!(out.contains("src=\"#\""));
        assert!(out.contains("<a href=\"#\">up</a>"));
    }
}
