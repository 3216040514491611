// SPDX-License-Identifier: MIT
//
// Host pipe modes: how the editor feeds a filter and what it does with
// the result.
//
// The host reads two annotations at the top of each script:
//
//   #%%%{CotEditorXInput=Selection}%%%
//   #%%%{CotEditorXOutput=ReplaceSelection}%%%
//
// They carry no runtime behavior here; each filter declares its pair as
// static data in the registry, and `cotfilter script` renders them back in
// this form.

use std::fmt;

// ---------------------------------------------------------------------------
// InputMode
// ---------------------------------------------------------------------------

/// What the host supplies on standard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// The highlighted text.
    Selection,
    /// The whole document.
    AllText,
    /// Nothing; the filter does not read stdin.
    None,
}

impl InputMode {
    /// The annotation value, e.g. `AllText`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selection => "Selection",
            Self::AllText => "AllText",
            Self::None => "None",
        }
    }

    /// True if the filter consumes standard input.
    #[inline]
    #[must_use]
    pub const fn reads_stdin(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OutputMode
// ---------------------------------------------------------------------------

/// What the host does with standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputMode {
    ReplaceSelection,
    ReplaceAllText,
    /// Insert right after the selection, leaving it in place.
    InsertAfterSelection,
}

impl OutputMode {
    /// The annotation value, e.g. `ReplaceSelection`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReplaceSelection => "ReplaceSelection",
            Self::ReplaceAllText => "ReplaceAllText",
            Self::InsertAfterSelection => "InsertAfterSelection",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two host annotation lines for a mode pair.
#[must_use]
pub fn header_lines(input: InputMode, output: OutputMode) -> String {
    format!("#%%%{{CotEditorXInput={input}}}%%%\n#%%%{{CotEditorXOutput={output}}}%%%\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_display_matches_annotation() {
        assert_eq!(InputMode::Selection.to_string(), "Selection");
        assert_eq!(InputMode::AllText.to_string(), "AllText");
        assert_eq!(InputMode::None.to_string(), "None");
    }

    #[test]
    fn output_display_matches_annotation() {
        assert_eq!(OutputMode::ReplaceSelection.to_string(), "ReplaceSelection");
        assert_eq!(OutputMode::ReplaceAllText.to_string(), "ReplaceAllText");
        assert_eq!(
            OutputMode::InsertAfterSelection.to_string(),
            "InsertAfterSelection"
        );
    }

    #[test]
    fn only_none_skips_stdin() {
        assert!(InputMode::Selection.reads_stdin());
        assert!(InputMode::AllText.reads_stdin());
        assert!(!InputMode::None.reads_stdin());
    }

    #[test]
    fn header_lines_format() {
        assert_eq!(
            header_lines(InputMode::AllText, OutputMode::ReplaceAllText),
            "#%%%{CotEditorXInput=AllText}%%%\n#%%%{CotEditorXOutput=ReplaceAllText}%%%\n"
        );
    }
}
