//! Metadata stripping: drop front-matter and label lines, normalise the title.
//!
//! ## Rule Order
//!
//! 1. Remove the leading `---` … `---` front-matter block
//! 2. Blank out label lines (`tags:`, `dags:`, `gerð:`, …)
//! 3. Replace every `# ` title line with `## <meeting date>`
//! 4. Turn the fixed section headings into bold labels
//!
//! The date is read from the document as it was *before* stripping, so a
//! date link that only lives in the front-matter still counts.

use crate::error::Note2ClipError;
use crate::pipeline::date::MeetingDate;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use tracing::debug;

/// Output of [`strip_metadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedNote {
    pub markdown: String,
    pub date: MeetingDate,
}

/// Strip metadata from a raw note and rewrite its title as a date heading.
///
/// # Errors
/// [`Note2ClipError::MissingDate`] when the note has no `[[YYYY-MM-DD` link.
pub fn strip_metadata(document: &str) -> Result<StrippedNote, Note2ClipError> {
    let date = MeetingDate::find_in(document)?;

    let s = remove_front_matter(document);
    let s = remove_label_lines(&s);
    let s = replace_title(&s, &date);
    let s = bold_section_headings(&s);

    Ok(StrippedNote { markdown: s, date })
}

// ── Rule 1: Front-matter ─────────────────────────────────────────────────────

// Anchored at the start of the document only; `(?s)` lets the body span lines.
static RE_FRONT_MATTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\A---.*?---").unwrap());

fn remove_front_matter(input: &str) -> String {
    let out = RE_FRONT_MATTER.replace(input, "");
    debug!("Front-matter removed: {}", out.len() != input.len());
    out.into_owned()
}

// ── Rule 2: Label lines ──────────────────────────────────────────────────────

static RE_LABEL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:tags|[dD]ags|gerð|stofnun|samantekt|staðsetning|up):.*").unwrap()
});

fn remove_label_lines(input: &str) -> String {
    let removed = RE_LABEL_LINE.find_iter(input).count();
    debug!("Blanked {} label lines", removed);
    RE_LABEL_LINE.replace_all(input, "").into_owned()
}

// ── Rule 3: Title → date heading ─────────────────────────────────────────────

static RE_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# .*").unwrap());

/// Every H1 line gets the same heading; a note is expected to have one.
fn replace_title(input: &str, date: &MeetingDate) -> String {
    let heading = format!("## {date}");
    RE_TITLE.replace_all(input, NoExpand(&heading)).into_owned()
}

// ── Rule 4: Section headings → bold labels ───────────────────────────────────

static SECTION_LABELS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?m)^## Punktar fyrir fundinn", "**Punktar fyrir fundinn**"),
        (r"(?m)^## Umræður", "**Umræður**"),
        (r"(?m)^## Take [aA]way", "**Take Away**"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).unwrap(), label))
    .collect()
});

fn bold_section_headings(input: &str) -> String {
    SECTION_LABELS
        .iter()
        .fold(input.to_string(), |s, (re, label)| {
            re.replace_all(&s, NoExpand(label)).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE: &str = "---\ntags: fundur\nup:: [[2024-03-07]]\n---\n# Fundur með stjórn\ngerð: stjórnarfundur\n## Umræður\n- fjárhagsáætlun\n";

    #[test]
    fn test_remove_front_matter() {
        assert_eq!(remove_front_matter("---\na: 1\n---\nbody"), "\nbody");
    }

    #[test]
    fn test_front_matter_must_lead() {
        let input = "intro\n---\na: 1\n---\n";
        assert_eq!(remove_front_matter(input), input);
    }

    #[test]
    fn test_unclosed_front_matter_is_kept() {
        let input = "---\na: 1\nbody";
        assert_eq!(remove_front_matter(input), input);
    }

    #[test]
    fn test_only_first_block_removed() {
        assert_eq!(remove_front_matter("---\na\n---\nb\n---\nc\n---"), "\nb\n---\nc\n---");
    }

    #[test]
    fn test_label_lines_become_empty() {
        let input = "tags: a\nDags: b\ndags: c\ngerð: d\nstofnun: e\nsamantekt: f\nstaðsetning: g\nup: h\nkeep";
        assert_eq!(remove_label_lines(input), "\n\n\n\n\n\n\n\nkeep");
    }

    #[test]
    fn test_labels_only_match_at_line_start() {
        let input = "  tags: indented\nTags: capital\nnote tags: mid";
        assert_eq!(remove_label_lines(input), input);
    }

    #[test]
    fn test_replace_every_title() {
        let date = MeetingDate::from_parts(2024, 3, 7);
        assert_eq!(
            replace_title("# One\ntext\n# Two", &date),
            "## 7. mars 2024\ntext\n## 7. mars 2024"
        );
        assert_eq!(replace_title("## Kept\n#NoSpace", &date), "## Kept\n#NoSpace");
    }

    #[test]
    fn test_section_headings() {
        let input = "## Punktar fyrir fundinn\n## Umræður\n## Take away\n## Take Away\n## Annað";
        assert_eq!(
            bold_section_headings(input),
            "**Punktar fyrir fundinn**\n**Umræður**\n**Take Away**\n**Take Away**\n## Annað"
        );
    }

    #[test]
    fn test_section_heading_keeps_rest_of_line() {
        assert_eq!(bold_section_headings("## Umræður og fleira"), "**Umræður** og fleira");
    }

    #[test]
    fn test_strip_metadata_full() {
        let out = strip_metadata(NOTE).unwrap();
        assert_eq!(out.date, MeetingDate::from_parts(2024, 3, 7));
        assert_eq!(out.markdown, "\n## 7. mars 2024\n\n**Umræður**\n- fjárhagsáætlun\n");
    }

    #[test]
    fn test_date_read_before_stripping() {
        // The only date link lives in the front-matter that gets removed.
        let out = strip_metadata("---\nup: [[2022-06-17]]\n---\n# T").unwrap();
        assert_eq!(out.markdown, "\n## 17. júní 2022");
    }

    #[test]
    fn test_missing_date() {
        assert!(matches!(
            strip_metadata("# Fundur\n- a"),
            Err(Note2ClipError::MissingDate)
        ));
    }
}
