//! List structure: turn a run of indented list lines into nested `<ul>`/`<ol>`.
//!
//! Depth is the count of leading whitespace characters, one unit per tab or
//! space. The stack of open tags starts with the first line's list type and
//! grows by one tag per unit of depth, so every opened tag is closed by the
//! end of the run no matter how the depths jump around.

use crate::pipeline::inline::format_line;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_ORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.").unwrap());
static RE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- |[0-9]+\. ").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTag {
    Ul,
    Ol,
}

impl ListTag {
    pub fn open(self) -> &'static str {
        match self {
            ListTag::Ul => "<ul>",
            ListTag::Ol => "<ol>",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            ListTag::Ul => "</ul>",
            ListTag::Ol => "</ol>",
        }
    }
}

/// The marker a trimmed list line starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `N.`
    Ordered,
    /// `-`
    Unordered,
    /// Anything else, in practice `+`. Tracks depth but emits no item.
    Other,
}

impl Marker {
    pub fn of(content: &str) -> Self {
        if RE_ORDERED.is_match(content) {
            Marker::Ordered
        } else if content.starts_with('-') {
            Marker::Unordered
        } else {
            Marker::Other
        }
    }

    fn tag(self) -> ListTag {
        match self {
            Marker::Ordered => ListTag::Ol,
            Marker::Unordered | Marker::Other => ListTag::Ul,
        }
    }
}

/// Leading whitespace characters of `line`.
pub fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Render one list run to HTML, then pass each output line through
/// [`format_line`] so item text gets the same emphasis rules as paragraphs.
pub fn render_list(lines: &[&str]) -> String {
    let mut html = String::new();
    let mut depth = 0usize;
    let mut open: Vec<ListTag> = Vec::new();

    for line in lines {
        let indent = indent_level(line);
        let content = line.trim();
        let marker = Marker::of(content);
        let tag = marker.tag();

        if open.is_empty() {
            push_line(&mut html, 0, tag.open());
            open.push(tag);
        }

        while depth < indent {
            depth += 1;
            push_line(&mut html, depth - 1, tag.open());
            open.push(tag);
        }
        while depth > indent {
            let Some(closed) = open.pop() else { break };
            depth -= 1;
            push_line(&mut html, depth, closed.close());
        }

        if let Some(top) = open.last_mut() {
            if *top != tag {
                push_line(&mut html, depth.saturating_sub(1), top.close());
                push_line(&mut html, depth.saturating_sub(1), tag.open());
                *top = tag;
            }
        }

        if marker != Marker::Other {
            let item = RE_MARKER.replace(content, "");
            push_line(&mut html, indent, &format!("<li>{item}</li>"));
        }
    }

    while let Some(tag) = open.pop() {
        push_line(&mut html, 0, tag.close());
    }

    html.split('\n')
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn push_line(html: &mut String, indent: usize, text: &str) {
    html.extend(std::iter::repeat_n(' ', indent));
    html.push_str(text);
    html.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (opening tags, closing tags, deepest nesting) over the rendered HTML.
    fn tag_profile(html: &str) -> (usize, usize, usize) {
        let mut opens = 0;
        let mut closes = 0;
        let mut level = 0usize;
        let mut peak = 0;
        for line in html.lines() {
            let t = line.trim();
            if t == "<ul>" || t == "<ol>" {
                opens += 1;
                level += 1;
                peak = peak.max(level);
            } else if t == "</ul>" || t == "</ol>" {
                closes += 1;
                level -= 1;
            }
        }
        (opens, closes, peak)
    }

    #[test]
    fn test_flat_unordered() {
        assert_eq!(
            render_list(&["- a", "- b"]),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_flat_ordered() {
        assert_eq!(
            render_list(&["1. first", "2. second"]),
            "<ol>\n<li>first</li>\n<li>second</li>\n</ol>"
        );
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            render_list(&["- a", "\t- b", "- c"]),
            "<ul>\n<li>a</li>\n<ul>\n <li>b</li>\n</ul>\n<li>c</li>\n</ul>"
        );
    }

    #[test]
    fn test_type_switch_at_depth_zero() {
        assert_eq!(
            render_list(&["- a", "1. b"]),
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>"
        );
    }

    #[test]
    fn test_plus_marker_emits_no_item() {
        assert_eq!(render_list(&["+ hidden", "- shown"]), "<ul>\n<li>shown</li>\n</ul>");
        assert_eq!(render_list(&["+ only"]), "<ul>\n</ul>");
    }

    #[test]
    fn test_marker_without_space_is_kept() {
        assert_eq!(render_list(&["-tight"]), "<ul>\n<li>-tight</li>\n</ul>");
    }

    #[test]
    fn test_item_emphasis_is_formatted() {
        assert_eq!(
            render_list(&["- **Punktar**: discussed budget"]),
            "<ul>\n<li><span><strong>Punktar</strong></span>: discussed budget</li>\n</ul>"
        );
        assert_eq!(
            render_list(&["\t- with [[Project Alpha]]"]),
            "<ul>\n<ul>\n <li>with <span><strong>Project Alpha</strong></span></li>\n</ul>\n</ul>"
        );
    }

    #[test]
    fn test_run_starting_deep_opens_every_level() {
        let html = render_list(&["\t\t- deep"]);
        assert_eq!(tag_profile(&html), (3, 3, 3));
    }

    #[test]
    fn test_alternating_depth_profile() {
        let lines = ["- a", "1. b", "\t- c", "\t1. d", "\t\t- e", "\t1. f", "- g"];
        let html = render_list(&lines);
        let (opens, closes, peak) = tag_profile(&html);
        assert_eq!(opens, closes, "unbalanced:\n{html}");
        assert_eq!(peak, 3, "peak nesting:\n{html}");
        assert_eq!(html.matches("<li>").count(), 7);
    }

    #[test]
    fn test_every_small_run_is_balanced() {
        let markers = ["- x", "1. x", "+ x"];
        let shapes: Vec<String> = (0..4)
            .flat_map(|d| markers.iter().map(move |m| format!("{}{m}", "\t".repeat(d))))
            .collect();

        for a in &shapes {
            for b in &shapes {
                for c in &shapes {
                    let lines = [a.as_str(), b.as_str(), c.as_str()];
                    let html = render_list(&lines);
                    let (opens, closes, _) = tag_profile(&html);
                    assert_eq!(opens, closes, "unbalanced for {lines:?}:\n{html}");
                    assert!(opens >= 1, "no list opened for {lines:?}");
                }
            }
        }
    }

    #[test]
    fn test_indent_level_counts_any_whitespace() {
        assert_eq!(indent_level("\t\t- a"), 2);
        assert_eq!(indent_level("  \t- a"), 3);
        assert_eq!(indent_level("- a"), 0);
        assert_eq!(indent_level("   "), 3);
    }
}
