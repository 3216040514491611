//! Markdown fenced code blocks.
//!
//! The selection becomes the body of a fenced block. If the first line is a
//! bare word (`python`, `bash`, `rust`) and something follows it, that line
//! is taken as the info string instead of as code:
//!
//! ```text
//! python          ```python
//! x = 1     →     x = 1
//! y = 2           y = 2
//!                 ```
//! ```
//!
//! This needs one line of lookahead, so the whole input is buffered before
//! anything is emitted.

use crate::lines::{chomp, lines_inclusive};

/// The opening and closing fence marker.
pub const FENCE: &str = "```";

/// Wrap `input` in a fenced code block, detecting a language tag on the
/// first line.
#[must_use]
pub fn markdown_code_block(input: &str) -> String {
    let mut lines: Vec<&str> = lines_inclusive(input).collect();
    let language = match *lines.as_slice() {
        [first, _, ..] if is_language_tag(chomp(first)) => chomp(first),
        _ => "",
    };
    if !language.is_empty() {
        lines.remove(0);
    }
    log::debug!(
        "code block: language={language:?}, {} body lines",
        lines.len()
    );

    let body_len: usize = lines.iter().copied().map(str::len).sum();
    let mut out = String::with_capacity(body_len + language.len() + 2 * FENCE.len() + 2);
    out.push_str(FENCE);
    out.push_str(language);
    out.push('\n');
    for line in lines {
        out.push_str(line);
    }
    out.push_str(FENCE);
    out.push('\n');
    out
}

/// One or more ASCII word characters and nothing else.
fn is_language_tag(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_word_line_becomes_language() {
        assert_eq!(
            markdown_code_block("python\nx=1\ny=2\n"),
            "```python\nx=1\ny=2\n```\n"
        );
    }

    #[test]
    fn code_first_line_stays_in_body() {
        assert_eq!(
            markdown_code_block("x=1\ny=2\n"),
            "```\nx=1\ny=2\n```\n"
        );
    }

    #[test]
    fn single_word_line_is_body() {
        assert_eq!(markdown_code_block("hello\n"), "```\nhello\n```\n");
    }

    #[test]
    fn single_line_without_newline() {
        assert_eq!(markdown_code_block("hello"), "```\nhello```\n");
    }

    #[test]
    fn empty_input_gives_empty_fence_pair() {
        assert_eq!(markdown_code_block(""), "```\n```\n");
    }

    #[test]
    fn tag_followed_by_blank_line() {
        assert_eq!(markdown_code_block("sh\n\n"), "```sh\n\n```\n");
    }

    #[test]
    fn tag_allows_digits_and_underscores() {
        assert!(is_language_tag("c_99"));
        assert!(is_language_tag("x86"));
    }

    #[test]
    fn tag_rejects_punctuation_and_spaces() {
        assert!(!is_language_tag("c++"));
        assert!(!is_language_tag("objective c"));
        assert!(!is_language_tag(""));
    }

    #[test]
    fn crlf_tag_is_recognized() {
        assert_eq!(
            markdown_code_block("rust\r\nfn f() {}\r\n"),
            "```rust\nfn f() {}\r\n```\n"
        );
    }
}
