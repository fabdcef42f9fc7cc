//! Inline formatting: headings, emphasis and wiki-link brackets → HTML.
//!
//! Works on one line at a time with no state carried between lines. The
//! emphasis rules are a literal ordered table; each rule rewrites the output
//! of the previous one, so reordering them changes the result.

use once_cell::sync::Lazy;
use regex::Regex;

/// Heading prefixes and their tags. No two prefixes can match the same line.
const HEADINGS: [(&str, &str); 4] = [("## ", "h2"), ("### ", "h3"), ("#### ", "h4"), ("# ", "h1")];

/// Where a rule may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Only at the start of the line, at most once.
    Leading,
    /// Every non-overlapping occurrence.
    Everywhere,
}

struct Rule {
    pattern: Regex,
    replacement: &'static str,
    scope: Scope,
}

static PARAGRAPH_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    use Scope::{Everywhere, Leading};
    [
        // A leading bold label always gains a colon, with or without one in the source.
        (r"^\*\*(.*?)\*\*:", "<p><strong>${1}:</strong></p>", Leading),
        (r"^\*\*(.*?)\*\*", "<p><strong>${1}:</strong></p>", Leading),
        (r"^\*(.*?)\*", "<p><em>${1}</em></p>", Leading),
        (r"^__(.*?)__", "<p><strong>${1}</strong></p>", Leading),
        (r"^_(.*?)_", "<p><em>${1}</em></p>", Leading),
        (r"\[\[", "<span><strong>", Everywhere),
        (r"\]\]", "</strong></span>", Everywhere),
        (r"\*\*(.*?)\*\*", "<span><strong>${1}</strong></span>", Everywhere),
        (r"\*(.*?)\*", "<span><em>${1}</em></span>", Everywhere),
    ]
    .into_iter()
    .map(|(pattern, replacement, scope)| Rule {
        pattern: Regex::new(pattern).unwrap(),
        replacement,
        scope,
    })
    .collect()
});

/// Format a single line.
///
/// Heading lines become `<hN>…</hN>` followed by a newline and get no
/// emphasis rewriting. Blank lines are returned unchanged.
pub fn format_line(line: &str) -> String {
    for (prefix, tag) in HEADINGS {
        if let Some(rest) = line.strip_prefix(prefix) {
            return format!("<{tag}>{rest}</{tag}>\n");
        }
    }

    if line.trim().is_empty() {
        return line.to_string();
    }

    PARAGRAPH_RULES.iter().fold(line.to_string(), |s, rule| {
        let out = match rule.scope {
            Scope::Leading => rule.pattern.replace(&s, rule.replacement),
            Scope::Everywhere => rule.pattern.replace_all(&s, rule.replacement),
        };
        out.into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(format_line("# T"), "<h1>T</h1>\n");
        assert_eq!(format_line("## 7. mars 2024"), "<h2>7. mars 2024</h2>\n");
        assert_eq!(format_line("### Sub"), "<h3>Sub</h3>\n");
        assert_eq!(format_line("#### Minor"), "<h4>Minor</h4>\n");
    }

    #[test]
    fn test_heading_needs_space_and_line_start() {
        assert_eq!(format_line("#tag"), "#tag");
        assert_eq!(format_line("text ## not heading"), "text ## not heading");
        assert_eq!(format_line("##### five"), "##### five");
    }

    #[test]
    fn test_heading_content_is_not_rewritten() {
        assert_eq!(format_line("## **bold** [[x]]"), "<h2>**bold** [[x]]</h2>\n");
    }

    #[test]
    fn test_blank_passthrough() {
        assert_eq!(format_line(""), "");
        assert_eq!(format_line("   \t"), "   \t");
    }

    #[test]
    fn test_leading_bold_with_colon() {
        assert_eq!(
            format_line("**Punktar**: discussed budget"),
            "<p><strong>Punktar:</strong></p> discussed budget"
        );
    }

    #[test]
    fn test_leading_bold_always_gets_colon() {
        assert_eq!(format_line("**Take Away**"), "<p><strong>Take Away:</strong></p>");
        assert_eq!(
            format_line("**Umræður** og fleira"),
            "<p><strong>Umræður:</strong></p> og fleira"
        );
    }

    #[test]
    fn test_leading_italic_and_underscores() {
        assert_eq!(format_line("*athugið* þetta"), "<p><em>athugið</em></p> þetta");
        assert_eq!(format_line("__mikilvægt__ mál"), "<p><strong>mikilvægt</strong></p> mál");
        assert_eq!(format_line("_lítið_"), "<p><em>lítið</em></p>");
    }

    #[test]
    fn test_underscores_mid_line_untouched() {
        assert_eq!(format_line("snake_case_name"), "snake_case_name");
    }

    #[test]
    fn test_wiki_link() {
        assert_eq!(
            format_line("see [[Project Alpha]] now"),
            "see <span><strong>Project Alpha</strong></span> now"
        );
    }

    #[test]
    fn test_unbalanced_brackets_degrade() {
        assert_eq!(format_line("open [[only"), "open <span><strong>only");
        assert_eq!(format_line("single [bracket]"), "single [bracket]");
    }

    #[test]
    fn test_interior_emphasis() {
        assert_eq!(
            format_line("a **b** c *d*"),
            "a <span><strong>b</strong></span> c <span><em>d</em></span>"
        );
    }

    #[test]
    fn test_inside_list_item() {
        assert_eq!(
            format_line("<li>**Punktar**: discussed budget</li>"),
            "<li><span><strong>Punktar</strong></span>: discussed budget</li>"
        );
    }

    #[test]
    fn test_dollar_in_text_is_literal() {
        assert_eq!(format_line("**$1 cost**"), "<p><strong>$1 cost:</strong></p>");
    }

    #[test]
    fn test_tags_pass_through() {
        assert_eq!(format_line("<ul>"), "<ul>");
        assert_eq!(format_line(" </ol>"), " </ol>");
    }
}
