//! Line classification and run splitting.
//!
//! A list line is optional leading *tabs* followed by `+`, `-` or `N. `.
//! Space-indented markers are ordinary lines, while depth inside a run
//! counts any whitespace (see [`crate::pipeline::lists`]).

use once_cell::sync::Lazy;
use regex::Regex;

static RE_LIST_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\t*(?:\+|-|[0-9]+\. )").unwrap());

/// One unit of the document in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// A maximal run of consecutive list lines.
    List(Vec<&'a str>),
    /// Any other single line (possibly empty).
    Line(&'a str),
}

pub fn is_list_line(line: &str) -> bool {
    RE_LIST_LINE.is_match(line)
}

/// Split on `\n` and group consecutive list lines into [`Block::List`] runs.
pub fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if is_list_line(line) {
            run.push(line);
            continue;
        }
        if !run.is_empty() {
            blocks.push(Block::List(std::mem::take(&mut run)));
        }
        blocks.push(Block::Line(line));
    }
    if !run.is_empty() {
        blocks.push(Block::List(run));
    }

    blocks
}
