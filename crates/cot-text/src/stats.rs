//! Text statistics report.
//!
//! [`TextStats::analyze`] gathers counts and frequency tables in one pass
//! over the text; [`TextStats::report`] renders them as the plain-text
//! report that replaces the selection.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;

/// Message emitted instead of a report when there is no text.
pub const EMPTY_MESSAGE: &str = "No text selected for analysis.";

/// Entries kept in each frequency table.
pub const TOP_N: usize = 10;

/// Average adult silent-reading speed used for the estimate.
pub const WORDS_PER_MINUTE: f64 = 200.0;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Counts and frequency tables for a piece of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStats {
    pub characters: usize,
    /// Characters other than space, tab and newline.
    pub characters_no_spaces: usize,
    pub lines: usize,
    pub words: usize,
    /// Runs of `.`, `!` or `?`.
    pub sentences: usize,
    /// Non-blank chunks separated by a blank line.
    pub paragraphs: usize,
    /// Up to [`TOP_N`] lowercased characters, most frequent first.
    pub top_chars: Vec<(char, usize)>,
    /// Up to [`TOP_N`] lowercased words, most frequent first.
    pub top_words: Vec<(String, usize)>,
}

impl TextStats {
    /// Analyze `text`.
    #[must_use]
    pub fn analyze(text: &str) -> Self {
        let lowered = text.to_lowercase();
        Self {
            characters: text.chars().count(),
            characters_no_spaces: text
                .chars()
                .filter(|c| !matches!(c, ' ' | '\n' | '\t'))
                .count(),
            lines: text.lines().count(),
            words: WORD.find_iter(text).count(),
            sentences: SENTENCE_END.find_iter(text).count(),
            paragraphs: text
                .split("\n\n")
                .filter(|p| !p.trim().is_empty())
                .count(),
            top_chars: most_common(lowered.chars()),
            top_words: most_common(WORD.find_iter(&lowered).map(|m| m.as_str().to_string())),
        }
    }

    /// Estimated reading time in minutes, rounded to one decimal.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn reading_minutes(&self) -> f64 {
        (self.words as f64 / WORDS_PER_MINUTE * 10.0).round() / 10.0
    }

    /// Render the report. There is no trailing newline.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== TEXT STATISTICS ===");
        let _ = writeln!(out);
        let _ = writeln!(out, "Basic Counts:");
        let _ = writeln!(out, "  Characters: {}", group_thousands(self.characters));
        let _ = writeln!(
            out,
            "  Characters (no spaces): {}",
            group_thousands(self.characters_no_spaces)
        );
        let _ = writeln!(out, "  Lines: {}", group_thousands(self.lines));
        let _ = writeln!(out, "  Words: {}", group_thousands(self.words));
        let _ = writeln!(out, "  Sentences: {}", group_thousands(self.sentences));
        let _ = writeln!(out, "  Paragraphs: {}", group_thousands(self.paragraphs));
        let _ = writeln!(out, "  Reading time: {:.1} minutes", self.reading_minutes());
        let _ = writeln!(out);
        out.push_str("Most Common Characters:");
        for (ch, count) in self.top_chars.iter().filter(|(c, _)| is_printable(*c)) {
            let _ = write!(out, "\n  '{ch}': {count}");
        }
        out.push_str("\n\nMost Common Words:");
        for (word, count) in &self.top_words {
            let _ = write!(out, "\n  '{word}': {count}");
        }
        out
    }
}

/// Run the text-stats filter: the report, or [`EMPTY_MESSAGE`].
#[must_use]
pub fn text_stats(input: &str) -> String {
    if input.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    TextStats::analyze(input).report()
}

/// Top [`TOP_N`] items by count. Ties keep first-seen order.
fn most_common<T: Eq + Hash + Clone>(items: impl Iterator<Item = T>) -> Vec<(T, usize)> {
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        if let Some(&i) = index.get(&item) {
            counts[i].1 += 1;
        } else {
            index.insert(item.clone(), counts.len());
            counts.push((item, 1));
        }
    }
    // Stable sort: equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_N);
    counts
}

/// `1234567` → `"1,234,567"`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Space counts as printable; other whitespace and control characters do not.
fn is_printable(c: char) -> bool {
    c == ' ' || !(c.is_control() || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn basic_counts() {
        let stats = TextStats::analyze("Hello world. Bye!\n\nNew para?\n");
        assert_eq!(stats.characters, 29);
        assert_eq!(stats.characters_no_spaces, 23);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.words, 5);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.paragraphs, 2);
    }

    #[test]
    fn ellipsis_is_one_sentence_end() {
        assert_eq!(TextStats::analyze("Wait... what?!").sentences, 2);
    }

    #[test]
    fn word_frequency_is_case_insensitive() {
        let stats = TextStats::analyze("The cat and the hat. THE end");
        assert_eq!(stats.top_words[0], ("the".to_string(), 3));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let stats = TextStats::analyze("b a b a c");
        assert_eq!(
            stats.top_words,
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn tables_are_capped() {
        let text: String = ('a'..='z').map(|c| format!("{c} ")).collect();
        let stats = TextStats::analyze(&text);
        assert_eq!(stats.top_words.len(), TOP_N);
        assert_eq!(stats.top_chars.len(), TOP_N);
        assert_eq!(stats.top_chars[0], (' ', 26));
    }

    #[test]
    fn reading_time_rounds_to_tenths() {
        let text = "word ".repeat(250);
        assert!((TextStats::analyze(&text).reading_minutes() - 1.3).abs() < f64::EPSILON);
    }

    #[test]
    fn report_layout() {
        let report = TextStats::analyze("Aa b.\n").report();
        let expected = "\
=== TEXT STATISTICS ===

Basic Counts:
  Characters: 6
  Characters (no spaces): 4
  Lines: 1
  Words: 2
  Sentences: 1
  Paragraphs: 1
  Reading time: 0.0 minutes

Most Common Characters:
  'a': 2
  ' ': 1
  'b': 1
  '.': 1

Most Common Words:
  'aa': 1
  'b': 1";
        assert_eq!(report, expected);
    }

    #[test]
    fn empty_input_message() {
        assert_eq!(text_stats(""), EMPTY_MESSAGE);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
