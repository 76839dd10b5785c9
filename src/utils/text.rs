//! Pure text helpers used while rewriting test cases.
//!
//! Nothing in here touches I/O or fails: every function maps a string (or the
//! absence of one) to a string.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("line break pattern is valid"));

static BLOCK_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:p|span|div|ul|li)\b[^>]*>").expect("block tag pattern is valid")
});

static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));

static TEST_CASE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^/\s]+/projects/[^/\s]+/test_cases\?text=([^/\s&"']+)"#)
        .expect("test case link pattern is valid")
});

const BOLD_MARKER: &str = "**";
const PRECONDITIONS_WORD: &str = "Preconditions";
const PRECONDITIONS_BOLD: &str = "**Preconditions**";
const PRECONDITIONS_HEADING: &str = "## Preconditions";

/// Minimum width of an identifier body, zero-padded on the left.
pub const ID_WIDTH: usize = 8;
pub const ID_PREFIX: char = 'T';

/// Destination priority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Normal,
    Low,
}

impl Priority {
    /// Maps a source priority label. Lookup is case-sensitive; anything unknown
    /// (including an empty value) becomes `Normal`.
    pub fn from_source(label: &str) -> Self {
        match label {
            "Blocker" | "Critical" | "High" => Priority::High,
            "Major" | "Minor" | "Normal" => Priority::Normal,
            "Trivial" | "Low" => Priority::Low,
            _ => Priority::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }
}

pub fn map_priority(label: Option<&str>) -> &'static str {
    Priority::from_source(label.unwrap_or_default()).as_str()
}

/// Normalizes a source key into a destination identifier: hyphens removed,
/// lowercased, left-padded with `0` to eight characters and prefixed with `T`.
/// Empty keys yield `None`.
pub fn format_id(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let body: String = raw.chars().filter(|c| *c != '-').collect::<String>().to_lowercase();
    Some(format!("{}{:0>width$}", ID_PREFIX, body, width = ID_WIDTH))
}

/// Strips the handful of HTML tags the exporter emits and flattens the result
/// into plain Markdown-friendly text.
pub fn clean_html(text: Option<&str>) -> String {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };

    let text = LINE_BREAK_RE.replace_all(text, "\n");
    let text = BLOCK_TAG_RE.replace_all(&text, "");
    let text = BLANK_LINES_RE.replace_all(&text, "\n");
    text.replace(BOLD_MARKER, "").trim().to_string()
}

/// Rewrites every test case search link into a Markdown link pointing at the
/// converted identifier (without its `T` prefix).
pub fn rewrite_test_case_links(text: &str) -> String {
    TEST_CASE_LINK_RE
        .replace_all(text, |caps: &Captures| {
            let token = &caps[1];
            let target = format_id(token)
                .map(|id| id.strip_prefix(ID_PREFIX).unwrap_or(&id).to_string())
                .unwrap_or_default();
            format!("[{}]({})", token, target)
        })
        .into_owned()
}

/// Turns the bold `**Preconditions**` marker into a level-2 heading. Other
/// spellings of the word are left alone.
pub fn promote_preconditions(text: &str) -> String {
    if text.contains(PRECONDITIONS_WORD) {
        text.replace(PRECONDITIONS_BOLD, PRECONDITIONS_HEADING)
    } else {
        text.to_string()
    }
}

/// Converts a `->` separated suite path into a folder path.
pub fn suite_to_folder(suite: &str) -> String {
    suite.replace("->", "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(""), None);
        assert_eq!(format_id("1").as_deref(), Some("T00000001"));
        assert_eq!(format_id("AB-CD").as_deref(), Some("T0000abcd"));
        assert_eq!(format_id("AB-123").as_deref(), Some("T000ab123"));
    }

    #[test]
    fn test_format_id_keeps_long_keys() {
        assert_eq!(format_id("PROJ-123456789").as_deref(), Some("Tproj123456789"));
    }

    #[test]
    fn test_priority_table() {
        let expected = [
            ("Blocker", "high"),
            ("Critical", "high"),
            ("Major", "normal"),
            ("Minor", "normal"),
            ("Trivial", "low"),
            ("High", "high"),
            ("Normal", "normal"),
            ("Low", "low"),
        ];
        for (source, target) in expected {
            assert_eq!(map_priority(Some(source)), target, "priority {}", source);
        }
    }

    #[test]
    fn test_priority_defaults_to_normal() {
        assert_eq!(map_priority(Some("Unknown")), "normal");
        assert_eq!(map_priority(Some("")), "normal");
        assert_eq!(map_priority(Some("critical")), "normal");
        assert_eq!(map_priority(None), "normal");
    }

    #[test]
    fn test_clean_html_line_breaks() {
        assert_eq!(clean_html(Some("Line1<br>Line2")), "Line1\nLine2");
        assert_eq!(clean_html(Some("a<BR/>b<br />c")), "a\nb\nc");
    }

    #[test]
    fn test_clean_html_strips_block_tags() {
        assert_eq!(clean_html(Some("<p>Text</p>")), "Text");
        assert_eq!(
            clean_html(Some(r#"<div class="x"><span style="color:red">Hi</span></div>"#)),
            "Hi"
        );
        assert_eq!(clean_html(Some("<ul><li>One</li></ul>")), "One");
    }

    #[test]
    fn test_clean_html_leaves_other_tags() {
        assert_eq!(clean_html(Some("<pre>code</pre>")), "<pre>code</pre>");
        assert_eq!(clean_html(Some("<b>x</b>")), "<b>x</b>");
    }

    #[test]
    fn test_clean_html_collapses_blank_lines_and_bold() {
        assert_eq!(clean_html(Some("**bold**")), "bold");
        assert_eq!(clean_html(Some("a\n   \n\nb")), "a\nb");
        assert_eq!(clean_html(Some("<p>a</p><br><br><p>b</p>")), "a\nb");
    }

    #[test]
    fn test_clean_html_empty() {
        assert_eq!(clean_html(None), "");
        assert_eq!(clean_html(Some("")), "");
        assert_eq!(clean_html(Some("  <p> </p> ")), "");
    }

    #[test]
    fn test_rewrite_single_link() {
        let text = "See https://x.testcaselab.com/projects/p/test_cases?text=42 for details";
        assert_eq!(rewrite_test_case_links(text), "See [42](00000042) for details");
    }

    #[test]
    fn test_rewrite_every_link() {
        let text = "http://h/projects/a/test_cases?text=AB-1 and https://h/projects/b/test_cases?text=7&page=2";
        assert_eq!(
            rewrite_test_case_links(text),
            "[AB-1](00000ab1) and [7](00000007)&page=2"
        );
    }

    #[test]
    fn test_rewrite_ignores_other_urls() {
        let text = "https://example.com/projects/p/runs?text=1";
        assert_eq!(rewrite_test_case_links(text), text);
    }

    #[test]
    fn test_promote_preconditions() {
        assert_eq!(
            promote_preconditions("**Preconditions**\nUser exists"),
            "## Preconditions\nUser exists"
        );
        assert_eq!(
            promote_preconditions("Preconditions: none"),
            "Preconditions: none"
        );
    }

    #[test]
    fn test_suite_to_folder() {
        assert_eq!(suite_to_folder("A->B->C"), "A/B/C");
        assert_eq!(suite_to_folder("Root"), "Root");
        assert_eq!(suite_to_folder(""), "");
    }
}
