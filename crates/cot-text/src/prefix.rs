//! Per-line prefix and strip filters.
//!
//! Two families live here, and they treat blank lines and terminators
//! differently:
//!
//! | Filter                      | Blank lines        | Terminator     |
//! |-----------------------------|--------------------|----------------|
//! | [`markdown_headers`]        | passed through     | always `\n`    |
//! | [`markdown_list`]           | passed through     | always `\n`    |
//! | [`markdown_numbered_list`]  | passed through     | always `\n`    |
//! | [`add_hash_comments`]       | prefixed           | preserved      |
//! | [`add_slash_comments`]      | prefixed           | preserved      |
//! | [`remove_hash_comments`]    | unchanged          | preserved      |
//! | [`remove_slash_comments`]   | unchanged          | preserved      |
//! | [`remove_leading_chars`]    | unchanged          | preserved      |
//!
//! Every filter emits exactly one output line per input line.

use std::fmt::Write as _;

use crate::lines::{lines_inclusive, split_terminator};

/// Characters removed by [`remove_leading_chars`]: quote markers, comment
/// hashes and one level of indentation (including the full-width space).
pub const LEADING_CHARS: &[char] = &['>', '\'', '#', '\t', ' ', '\u{3000}'];

// ---------------------------------------------------------------------------
// Markdown prefixes
// ---------------------------------------------------------------------------

/// Turn every non-blank line into a level-one Markdown header (`# `).
#[must_use]
pub fn markdown_headers(input: &str) -> String {
    map_nonempty(input, |content, out| {
        out.push_str("# ");
        out.push_str(content);
    })
}

/// Turn every non-blank line into a Markdown bullet (`- `).
#[must_use]
pub fn markdown_list(input: &str) -> String {
    map_nonempty(input, |content, out| {
        out.push_str("- ");
        out.push_str(content);
    })
}

/// Turn every non-blank line into a numbered Markdown item.
///
/// Numbering starts at 1 and only advances on non-blank lines, so blank
/// separators do not leave gaps: `a`, ``, `b` becomes `1. a`, ``, `2. b`.
#[must_use]
pub fn markdown_numbered_list(input: &str) -> String {
    let mut counter = 1usize;
    map_nonempty(input, |content, out| {
        let _ = write!(out, "{counter}. {content}");
        counter += 1;
    })
}

/// Emit each line as `render(content)` + `\n`, or a bare `\n` when the
/// line's content is empty.
fn map_nonempty(input: &str, mut render: impl FnMut(&str, &mut String)) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for line in lines_inclusive(input) {
        let (content, _) = split_terminator(line);
        if !content.is_empty() {
            render(content, &mut out);
        }
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Comment markers
// ---------------------------------------------------------------------------

/// Comment out every line with `#`, blank lines included.
#[must_use]
pub fn add_hash_comments(input: &str) -> String {
    prepend_each(input, "#")
}

/// Comment out every line with `//`, blank lines included.
#[must_use]
pub fn add_slash_comments(input: &str) -> String {
    prepend_each(input, "//")
}

/// Remove a leading `#` plus at most one following ASCII whitespace character.
///
/// Handles both the bare `#x` lines [`add_hash_comments`] writes and the
/// common `# x` style.
#[must_use]
pub fn remove_hash_comments(input: &str) -> String {
    map_content(input, |content| strip_marker(content, "#"))
}

/// Remove a leading `//` plus at most one following ASCII whitespace character.
#[must_use]
pub fn remove_slash_comments(input: &str) -> String {
    map_content(input, |content| strip_marker(content, "//"))
}

/// Remove one leading character from [`LEADING_CHARS`] on each line.
///
/// Only a single character is removed per run, so repeated application
/// peels one level of quoting or indentation at a time.
#[must_use]
pub fn remove_leading_chars(input: &str) -> String {
    map_content(input, |content| {
        content.strip_prefix(LEADING_CHARS).unwrap_or(content)
    })
}

fn prepend_each(input: &str, prefix: &str) -> String {
    let line_count = lines_inclusive(input).count();
    let mut out = String::with_capacity(input.len() + line_count * prefix.len());
    for line in lines_inclusive(input) {
        out.push_str(prefix);
        out.push_str(line);
    }
    out
}

/// Apply `edit` to each line's content and reattach the original terminator.
///
/// The terminator is kept out of `edit`'s reach, so a strip can never
/// swallow a line break and merge two lines.
fn map_content<'a>(input: &'a str, edit: impl Fn(&'a str) -> &'a str) -> String {
    let mut out = String::with_capacity(input.len());
    for line in lines_inclusive(input) {
        let (content, terminator) = split_terminator(line);
        out.push_str(edit(content));
        out.push_str(terminator);
    }
    out
}

fn strip_marker<'a>(content: &'a str, marker: &str) -> &'a str {
    content.strip_prefix(marker).map_or(content, |rest| {
        rest.strip_prefix(|c: char| c.is_ascii_whitespace()).unwrap_or(rest)
    })
}
