//! Curly-brace wrapping.
//!
//! Braces hug the first and last non-blank content. Blank lines that pad
//! the selection stay outside the braces, so wrapping a selection that
//! includes surrounding empty lines does not pull them inside.

const LINE_BREAKS: &[char] = &['\n', '\r'];

/// Wrap `input` in `{` and `}`, keeping leading and trailing runs of line
/// breaks outside the braces.
///
/// `"\n\nfoo\nbar\n\n"` becomes `"\n\n{foo\nbar}\n\n"`. Input made only of
/// line breaks belongs entirely to the leading run.
#[must_use]
pub fn wrap_curly_braces(input: &str) -> String {
    let rest = input.trim_start_matches(LINE_BREAKS);
    let leading = &input[..input.len() - rest.len()];
    let body = rest.trim_end_matches(LINE_BREAKS);
    let trailing = &rest[body.len()..];

    let mut out = String::with_capacity(input.len() + 2);
    out.push_str(leading);
    out.push('{');
    out.push_str(body);
    out.push('}');
    out.push_str(trailing);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_stays_outside() {
        assert_eq!(wrap_curly_braces("\n\nfoo\nbar\n\n"), "\n\n{foo\nbar}\n\n");
    }

    #[test]
    fn bare_text() {
        assert_eq!(wrap_curly_braces("a: 1"), "{a: 1}");
    }

    #[test]
    fn empty_input() {
        assert_eq!(wrap_curly_braces(""), "{}");
    }

    #[test]
    fn only_line_breaks_go_before_braces() {
        assert_eq!(wrap_curly_braces("\n\r\n"), "\n\r\n{}");
    }

    #[test]
    fn crlf_padding() {
        assert_eq!(wrap_curly_braces("\r\nx\r\n"), "\r\n{x}\r\n");
    }

    #[test]
    fn inner_blank_lines_kept() {
        assert_eq!(wrap_curly_braces("a\n\nb\n"), "{a\n\nb}\n");
    }

    #[test]
    fn spaces_are_not_padding() {
        assert_eq!(wrap_curly_braces("  x  \n"), "{  x  }\n");
    }
}
