// SPDX-License-Identifier: MIT
//
// Command-line surface. One subcommand per filter, plus `list` and
// `script` for wiring filters into the host editor.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use cot_text::case::Case;
use cot_text::random::DEFAULT_LENGTH;

use crate::registry::Filter;

#[derive(Parser, Debug)]
#[command(name = "cotfilter", about, version, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity on stderr (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every filter with its host input and output modes
    List,

    /// Print a host wrapper script for a filter
    Script {
        /// Filter name, as shown by `list`
        #[arg(value_parser = parse_filter)]
        filter: Filter,
    },

    #[command(flatten)]
    Filter(FilterCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    /// Prefix each non-blank line with `# `
    MarkdownHeaders,
    /// Prefix each non-blank line with `- `
    MarkdownList,
    /// Number each non-blank line as a Markdown ordered list
    MarkdownNumberedList,
    /// Wrap the text in a fenced code block
    MarkdownCodeBlock,
    /// Comment out every line with `#`
    AddHashComments,
    /// Remove a leading `#` comment marker
    RemoveHashComments,
    /// Comment out every line with `//`
    AddSlashComments,
    /// Remove a leading `//` comment marker
    RemoveSlashComments,
    /// Remove one leading quote, hash, tab or space character
    RemoveLeadingChars,
    /// Wrap the text in curly braces
    WrapCurlyBraces,
    /// Apply the tab-separated replacements given on the first line
    MultiReplace,
    /// Print a random alphanumeric string
    RandomString {
        /// Number of characters
        #[arg(long, default_value_t = DEFAULT_LENGTH)]
        length: usize,
    },
    /// Prefix every line with an aligned line number
    LineNumbers(LineNumberArgs),
    /// Replace the text with a statistics report
    TextStats,
    /// Convert the text to another case
    TransformCase {
        /// Target case
        #[arg(long, value_enum, default_value_t = CaseArg::Camel)]
        case: CaseArg,
    },
    /// Convert JSON to YAML
    JsonToYaml,
    /// Convert YAML to JSON
    YamlToJson,
    /// Convert CSV to JSON
    CsvToJson,
    /// Convert JSON to CSV
    JsonToCsv,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LineNumberArgs {
    /// Text between the number and the line
    #[arg(long, default_value = "|")]
    pub separator: String,

    /// Number of the first line
    #[arg(long, default_value_t = 1)]
    pub start: usize,

    /// Increment between lines
    #[arg(long, default_value_t = 1)]
    pub step: usize,
}

impl FilterCommand {
    /// The registry entry this command runs.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        match self {
            Self::MarkdownHeaders => Filter::MarkdownHeaders,
            Self::MarkdownList => Filter::MarkdownList,
            Self::MarkdownNumberedList => Filter::MarkdownNumberedList,
            Self::MarkdownCodeBlock => Filter::MarkdownCodeBlock,
            Self::AddHashComments => Filter::AddHashComments,
            Self::RemoveHashComments => Filter::RemoveHashComments,
            Self::AddSlashComments => Filter::AddSlashComments,
            Self::RemoveSlashComments => Filter::RemoveSlashComments,
            Self::RemoveLeadingChars => Filter::RemoveLeadingChars,
            Self::WrapCurlyBraces => Filter::WrapCurlyBraces,
            Self::MultiReplace => Filter::MultiReplace,
            Self::RandomString { .. } => Filter::RandomString,
            Self::LineNumbers(_) => Filter::LineNumbers,
            Self::TextStats => Filter::TextStats,
            Self::TransformCase { .. } => Filter::TransformCase,
            Self::JsonToYaml => Filter::JsonToYaml,
            Self::YamlToJson => Filter::YamlToJson,
            Self::CsvToJson => Filter::CsvToJson,
            Self::JsonToCsv => Filter::JsonToCsv,
        }
    }
}

/// `--case` values. Mirrors [`Case`] so the text crate stays free of clap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CaseArg {
    Camel,
    Snake,
    Kebab,
    Pascal,
    Constant,
    Sentence,
    Title,
    RemoveAccents,
    Slug,
}

impl From<CaseArg> for Case {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Camel => Self::Camel,
            CaseArg::Snake => Self::Snake,
            CaseArg::Kebab => Self::Kebab,
            CaseArg::Pascal => Self::Pascal,
            CaseArg::Constant => Self::Constant,
            CaseArg::Sentence => Self::Sentence,
            CaseArg::Title => Self::Title,
            CaseArg::RemoveAccents => Self::RemoveAccents,
            CaseArg::Slug => Self::Slug,
        }
    }
}

fn parse_filter(value: &str) -> Result<Filter, String> {
    Filter::ALL
        .into_iter()
        .find(|f| f.info().name == value)
        .ok_or_else(|| format!("unknown filter '{value}' (see `cotfilter list`)"))
}
