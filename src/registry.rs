// SPDX-License-Identifier: MIT
//
// Filter registry: the static table of every filter cotfilter offers.
//
// Each entry pairs a subcommand name with its host modes and a one-line
// summary. The table is data only; running a filter happens in main.rs,
// which needs the per-filter options parsed by clap.

use std::fmt::Write as _;

use crate::mode::{InputMode, OutputMode};

/// Static description of one filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterInfo {
    /// Subcommand name, kebab-case.
    pub name: &'static str,
    pub summary: &'static str,
    pub input: InputMode,
    pub output: OutputMode,
}

/// Every filter, one variant each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    MarkdownHeaders,
    MarkdownList,
    MarkdownNumberedList,
    MarkdownCodeBlock,
    AddHashComments,
    RemoveHashComments,
    AddSlashComments,
    RemoveSlashComments,
    RemoveLeadingChars,
    WrapCurlyBraces,
    MultiReplace,
    RandomString,
    LineNumbers,
    TextStats,
    TransformCase,
    JsonToYaml,
    YamlToJson,
    CsvToJson,
    JsonToCsv,
}

impl Filter {
    /// Every filter, in listing order.
    pub const ALL: [Self; 19] = [
        Self::MarkdownHeaders,
        Self::MarkdownList,
        Self::MarkdownNumberedList,
        Self::MarkdownCodeBlock,
        Self::AddHashComments,
        Self::RemoveHashComments,
        Self::AddSlashComments,
        Self::RemoveSlashComments,
        Self::RemoveLeadingChars,
        Self::WrapCurlyBraces,
        Self::MultiReplace,
        Self::RandomString,
        Self::LineNumbers,
        Self::TextStats,
        Self::TransformCase,
        Self::JsonToYaml,
        Self::YamlToJson,
        Self::CsvToJson,
        Self::JsonToCsv,
    ];

    /// The filter's static description.
    #[must_use]
    pub const fn info(self) -> FilterInfo {
        use InputMode::{AllText, Selection};
        use OutputMode::{ReplaceAllText, ReplaceSelection};

        let (name, summary, input, output) = match self {
            Self::MarkdownHeaders => (
                "markdown-headers",
                "Prefix each non-blank line with `# `",
                Selection,
                ReplaceSelection,
            ),
            Self::MarkdownList => (
                "markdown-list",
                "Prefix each non-blank line with `- `",
                Selection,
                ReplaceSelection,
            ),
            Self::MarkdownNumberedList => (
                "markdown-numbered-list",
                "Number each non-blank line `1. `, `2. `, ...",
                Selection,
                ReplaceSelection,
            ),
            Self::MarkdownCodeBlock => (
                "markdown-code-block",
                "Wrap in a fenced code block; a bare first word sets the language",
                Selection,
                ReplaceSelection,
            ),
            Self::AddHashComments => (
                "add-hash-comments",
                "Prefix every line with `#`",
                Selection,
                ReplaceSelection,
            ),
            Self::RemoveHashComments => (
                "remove-hash-comments",
                "Strip a leading `#` and one whitespace character",
                Selection,
                ReplaceSelection,
            ),
            Self::AddSlashComments => (
                "add-slash-comments",
                "Prefix every line with `//`",
                Selection,
                ReplaceSelection,
            ),
            Self::RemoveSlashComments => (
                "remove-slash-comments",
                "Strip a leading `//` and one whitespace character",
                Selection,
                ReplaceSelection,
            ),
            Self::RemoveLeadingChars => (
                "remove-leading-chars",
                "Strip one leading `>`, `'`, `#`, tab or space",
                Selection,
                ReplaceSelection,
            ),
            Self::WrapCurlyBraces => (
                "wrap-curly-braces",
                "Wrap in `{}` inside any surrounding blank lines",
                Selection,
                ReplaceSelection,
            ),
            Self::MultiReplace => (
                "multi-replace",
                "Apply tab-separated regex replacements from the first line",
                AllText,
                ReplaceAllText,
            ),
            Self::RandomString => (
                "random-string",
                "Insert a random alphanumeric string",
                InputMode::None,
                OutputMode::InsertAfterSelection,
            ),
            Self::LineNumbers => (
                "line-numbers",
                "Prefix every line with an aligned line number",
                Selection,
                ReplaceSelection,
            ),
            Self::TextStats => (
                "text-stats",
                "Replace the text with a statistics report",
                Selection,
                ReplaceSelection,
            ),
            Self::TransformCase => (
                "transform-case",
                "Convert to camelCase, snake_case, a slug, ...",
                Selection,
                ReplaceSelection,
            ),
            Self::JsonToYaml => (
                "json-to-yaml",
                "Convert JSON to YAML",
                Selection,
                ReplaceSelection,
            ),
            Self::YamlToJson => (
                "yaml-to-json",
                "Convert YAML to pretty-printed JSON",
                Selection,
                ReplaceSelection,
            ),
            Self::CsvToJson => (
                "csv-to-json",
                "Convert CSV with a header row to a JSON array of objects",
                Selection,
                ReplaceSelection,
            ),
            Self::JsonToCsv => (
                "json-to-csv",
                "Convert a JSON array or object to CSV",
                Selection,
                ReplaceSelection,
            ),
        };
        FilterInfo {
            name,
            summary,
            input,
            output,
        }
    }
}

/// Render the `list` table, one filter per row.
#[must_use]
pub fn listing() -> String {
    let name_width = Filter::ALL
        .iter()
        .map(|f| f.info().name.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for filter in Filter::ALL {
        let info = filter.info();
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<9}  {:<20}  {}",
            info.name,
            info.input.as_str(),
            info.output.as_str(),
            info.summary
        );
    }
    out
}
