//! Handling of the server's pre-rendered result fragment.
//!
//! The fragment arrives trusted and pre-escaped; this module only needs to
//! pull the pagination targets out of it and flatten it into text lines the
//! terminal can show. Pagination links are elements carrying a `page-link`
//! class and a `data-page` attribute, mirroring the delegation contract the
//! server markup is built around.

use std::sync::OnceLock;

use regex::Regex;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("static regex"))
}

fn data_page_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"data-page\s*=\s*["'](\d+)["']"#).expect("static regex"))
}

/// Extract the pagination targets embedded in a result fragment, in
/// document order. Only tags carrying the `page-link` class participate;
/// duplicate consecutive targets collapse.
pub fn page_links(html: &str) -> Vec<u32> {
    let mut pages = Vec::new();
    for tag in tag_re().find_iter(html) {
        let tag = tag.as_str();
        if !tag.contains("page-link") {
            continue;
        }
        if let Some(caps) = data_page_re().captures(tag) {
            if let Ok(page) = caps[1].parse::<u32>() {
                if page >= 1 && pages.last() != Some(&page) {
                    pages.push(page);
                }
            }
        }
    }
    pages
}

/// Flatten a fragment into displayable lines: block-level closers become
/// line breaks, remaining tags are stripped, common entities are decoded and
/// blank runs collapse.
pub fn display_lines(html: &str) -> Vec<String> {
    static BREAK_RE: OnceLock<Regex> = OnceLock::new();
    let break_re = BREAK_RE.get_or_init(|| {
        Regex::new(r"(?i)<br\s*/?>|</(p|div|li|ul|ol|h[1-6]|article|section|tr)\s*>")
            .expect("static regex")
    });

    let text = break_re.replace_all(html, "\n");
    let text = tag_re().replace_all(&text, "");
    let text = decode_entities(&text);

    let mut lines = Vec::new();
    let mut blank_pending = false;
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            blank_pending = !lines.is_empty();
        } else {
            if blank_pending {
                lines.push(String::new());
                blank_pending = false;
            }
            lines.push(line.to_string());
        }
    }
    lines
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
