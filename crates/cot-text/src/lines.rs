//! Line splitting for stream-style filters.
//!
//! Filters that work line by line see each line *with* its terminator. A
//! final line without a trailing newline is still a line. Empty input has
//! no lines at all.

/// Iterate over the lines of `text`, each including its `\n` terminator.
///
/// `"a\nb"` yields `"a\n"` then `"b"`; `""` yields nothing.
pub fn lines_inclusive(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}

/// Split a line into its content and its terminator.
///
/// Recognizes `\r\n`, `\n` and a bare `\r`. The terminator is `""` for a
/// final line that has none.
#[must_use]
pub fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, &line[content.len()..])
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, &line[content.len()..])
    } else if let Some(content) = line.strip_suffix('\r') {
        (content, &line[content.len()..])
    } else {
        (line, "")
    }
}

/// The content of a line without its terminator.
#[inline]
#[must_use]
pub fn chomp(line: &str) -> &str {
    split_terminator(line).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(lines_inclusive("").count(), 0);
    }

    #[test]
    fn lines_keep_terminators() {
        let lines: Vec<&str> = lines_inclusive("a\n\nb").collect();
        assert_eq!(lines, vec!["a\n", "\n", "b"]);
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        let lines: Vec<&str> = lines_inclusive("a\nb\n").collect();
        assert_eq!(lines, vec!["a\n", "b\n"]);
    }

    #[test]
    fn split_terminator_variants() {
        assert_eq!(split_terminator("abc\n"), ("abc", "\n"));
        assert_eq!(split_terminator("abc\r\n"), ("abc", "\r\n"));
        assert_eq!(split_terminator("abc\r"), ("abc", "\r"));
        assert_eq!(split_terminator("abc"), ("abc", ""));
        assert_eq!(split_terminator("\n"), ("", "\n"));
    }

    #[test]
    fn chomp_strips_only_terminator() {
        assert_eq!(chomp("  x  \n"), "  x  ");
        assert_eq!(chomp(""), "");
    }
}
