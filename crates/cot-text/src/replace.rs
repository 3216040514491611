//! Multi-replace: several regex substitutions in one pass.
//!
//! The first line of the input is not text but a control record: a
//! tab-separated list alternating pattern and replacement.
//!
//! ```text
//! cat<TAB>dog<TAB>(\w+)@(\w+)<TAB>\2 at \1
//! ```
//!
//! Every following line runs through each rule in order, and each rule
//! sees the output of the one before it (cascading substitution). With the
//! header above, `cat@home` becomes `dog@home` first and then `home at dog`.
//!
//! # Replacement syntax
//!
//! | Written        | Means                                   |
//! |----------------|-----------------------------------------|
//! | `\t` `\n` `\r` | tab, newline, carriage return           |
//! | `\1` .. `\9`   | capture group 1..9                      |
//! | `\0`, `\&`     | the whole match                         |
//! | `\k<name>`     | named capture group                     |
//! | `\\`           | a literal backslash                     |
//! | `$1`, `${name}`| capture group (native regex syntax)     |
//! | `$$`, `$USD`   | a literal `$` (and `$USD` as written)   |
//!
//! A pattern without a replacement (odd number of tokens) deletes its
//! matches.
//!
//! # Matching
//!
//! Each line is matched together with its terminator, so a rule for `\n`
//! can join lines. `^` and `$` match at line boundaries. An empty match
//! right after the line's own trailing newline is ignored, so `^` and `$`
//! each fire once per line.

use std::iter::Peekable;
use std::str::Chars;

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::lines::{chomp, lines_inclusive};

// ---------------------------------------------------------------------------
// ReplaceRule
// ---------------------------------------------------------------------------

/// One `(pattern, replacement)` pair from the header, before compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplaceRule {
    /// Raw regex source, used as written.
    pub pattern: String,
    /// Replacement text with `\t`, `\n` and `\r` already expanded.
    pub replacement: String,
}

impl ReplaceRule {
    /// Compile the pattern and translate the replacement into an expansion
    /// template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the pattern is not valid regex.
    pub fn compile(&self) -> Result<CompiledRule> {
        let regex = RegexBuilder::new(&self.pattern)
            .multi_line(true)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: self.pattern.clone(),
                source,
            })?;
        Ok(CompiledRule {
            regex,
            template: expansion_template(&self.replacement),
        })
    }
}

/// Parse the header line into rules.
///
/// Tokens at even positions are patterns, odd positions replacements.
/// Trailing empty tokens are dropped, so a header ending in a tab behaves
/// as if the tab were not there.
#[must_use]
pub fn parse_header(header: &str) -> Vec<ReplaceRule> {
    let mut tokens: Vec<&str> = chomp(header).split('\t').collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }

    tokens
        .chunks(2)
        .map(|pair| ReplaceRule {
            pattern: pair[0].to_string(),
            replacement: pair.get(1).copied().map_or_else(String::new, expand_escapes),
        })
        .collect()
}

/// Expand the literal two-character sequences `\t`, `\n`, `\r`.
#[must_use]
pub fn expand_escapes(s: &str) -> String {
    s.replace("\\t", "\t")
        .replace("\\n", "\n")
        .replace("\\r", "\r")
}

/// Translate backslash references into the regex crate's `$` syntax.
///
/// Digits are wrapped in braces (`\1` → `${1}`) so a following literal
/// digit or letter is not read as part of the group name. Backslashes that
/// do not start a reference are kept as written. A `$` is only a reference
/// before a digit or `{`; anywhere else it is escaped to `$$` and stays
/// literal, so `$USD` is not read as an unknown group.
fn expansion_template(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len() + 4);
    let mut chars = replacement.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => push_backslash_reference(&mut chars, &mut out),
            '$' => match chars.peek() {
                Some('0'..='9' | '{') => out.push('$'),
                Some('$') => {
                    chars.next();
                    out.push_str("$$");
                }
                _ => out.push_str("$$"),
            },
            _ => out.push(ch),
        }
    }
    out
}

/// Translate the escape after a `\`, consuming it from `chars`.
fn push_backslash_reference(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    match chars.peek().copied() {
        Some(d @ '0'..='9') => {
            chars.next();
            out.push_str("${");
            out.push(d);
            out.push('}');
        }
        Some('&') => {
            chars.next();
            out.push_str("${0}");
        }
        Some('\\') => {
            chars.next();
            out.push('\\');
        }
        Some('k') => {
            chars.next();
            if let Some(name) = take_group_name(chars) {
                out.push_str("${");
                out.push_str(&name);
                out.push('}');
            } else {
                out.push_str("\\k");
            }
        }
        _ => out.push('\\'),
    }
}

/// Consume `<name>` after `\k`. On anything but a well-formed, non-empty
/// name the iterator is left untouched.
fn take_group_name(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut lookahead = chars.clone();
    if lookahead.next() != Some('<') {
        return None;
    }
    let mut name = String::new();
    loop {
        match lookahead.next()? {
            '>' => break,
            c if c.is_alphanumeric() || c == '_' => name.push(c),
            _ => return None,
        }
    }
    if name.is_empty() {
        return None;
    }
    *chars = lookahead;
    Some(name)
}

// ---------------------------------------------------------------------------
// CompiledRule
// ---------------------------------------------------------------------------

/// A rule ready to apply: compiled regex plus expansion template.
#[derive(Clone, Debug)]
pub struct CompiledRule {
    regex: Regex,
    template: String,
}

impl CompiledRule {
    /// Replace every match in `line`, which includes its terminator.
    #[must_use]
    pub fn apply(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut last = 0;
        for caps in self.regex.captures_iter(line) {
            let Some(m) = caps.get(0) else { continue };
            if m.is_empty() && m.start() == line.len() && line.ends_with('\n') {
                continue;
            }
            out.push_str(&line[last..m.start()]);
            caps.expand(&self.template, &mut out);
            last = m.end();
        }
        out.push_str(&line[last..]);
        out
    }
}

/// Apply every rule to `line` in order, each on the previous result.
#[must_use]
pub fn apply_all(rules: &[CompiledRule], line: &str) -> String {
    let mut current = line.to_string();
    for rule in rules {
        current = rule.apply(&current);
    }
    log::trace!("multi-replace: {line:?} -> {current:?}");
    current
}

// ---------------------------------------------------------------------------
// Filter entry point
// ---------------------------------------------------------------------------

/// Run the multi-replace filter over `input`.
///
/// The header line is consumed and not echoed. Patterns are only compiled
/// once there is a body line to apply them to, so a header on its own
/// always succeeds with empty output.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] for the first header pattern that
/// fails to compile.
pub fn multi_replace(input: &str) -> Result<String> {
    let mut lines = lines_inclusive(input);
    let Some(header) = lines.next() else {
        return Ok(String::new());
    };
    let mut body = lines.peekable();
    if body.peek().is_none() {
        return Ok(String::new());
    }

    let rules = parse_header(header);
    log::debug!("multi-replace: {} rules from header", rules.len());
    let compiled = rules
        .iter()
        .map(ReplaceRule::compile)
        .collect::<Result<Vec<_>>>()?;

    let mut out = String::with_capacity(input.len() - header.len());
    for line in body {
        out.push_str(&apply_all(&compiled, line));
    }
    Ok(out)
}
