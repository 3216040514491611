//! Line numbering with aligned gutters.
//!
//! ```text
//!  9| first
//! 10| second
//! ```
//!
//! Numbers are right-aligned to the width of the last number so the
//! separators line up in a column.

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::lines::lines_inclusive;

/// Options for [`line_numbers`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberOptions {
    /// Text between the number and the line, followed by one space.
    pub separator: String,
    /// Number given to the first line.
    pub start: usize,
    /// Increment between consecutive lines.
    pub step: usize,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            separator: "|".to_string(),
            start: 1,
            step: 1,
        }
    }
}

/// Prefix every line with its number, the separator and a space.
///
/// Blank lines are numbered too. Terminators are preserved. Empty input
/// yields empty output.
///
/// # Errors
///
/// Returns [`Error::LineNumberOverflow`] if the last line's number does not
/// fit in a `usize`.
pub fn line_numbers(input: &str, opts: &NumberOptions) -> Result<String> {
    let lines: Vec<&str> = lines_inclusive(input).collect();
    let Some(last_index) = lines.len().checked_sub(1) else {
        return Ok(String::new());
    };
    let last_number = last_index
        .checked_mul(opts.step)
        .and_then(|offset| offset.checked_add(opts.start))
        .ok_or(Error::LineNumberOverflow {
            start: opts.start,
            step: opts.step,
            lines: lines.len(),
        })?;
    let width = digits(last_number);

    let prefix_len = width + opts.separator.len() + 1;
    let mut out = String::with_capacity(input.len() + lines.len() * prefix_len);
    // Every number is at most `last_number`, so none of these overflow.
    for (index, line) in lines.into_iter().enumerate() {
        let number = opts.start + index * opts.step;
        let _ = write!(out, "{number:>width$}{} {line}", opts.separator);
    }
    Ok(out)
}

/// Decimal digit count of `n` (`0` has one digit).
const fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_every_line() {
        assert_eq!(
            line_numbers("a\n\nb\n", &NumberOptions::default()).unwrap(),
            "1| a\n2| \n3| b\n"
        );
    }

    #[test]
    fn pads_to_last_number() {
        let input: String = (0..10).map(|i| format!("l{i}\n")).collect();
        let out = line_numbers(&input, &NumberOptions::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " 1| l0");
        assert_eq!(lines[9], "10| l9");
    }

    #[test]
    fn custom_separator_start_and_step() {
        let opts = NumberOptions {
            separator: ":".to_string(),
            start: 95,
            step: 5,
        };
        assert_eq!(line_numbers("x\ny\nz", &opts).unwrap(), " 95: x\n100: y\n105: z");
    }

    #[test]
    fn empty_input() {
        assert_eq!(line_numbers("", &NumberOptions::default()).unwrap(), "");
    }

    #[test]
    fn largest_start_numbers_a_single_line() {
        let opts = NumberOptions {
            start: usize::MAX,
            ..NumberOptions::default()
        };
        assert_eq!(line_numbers("a\n", &opts).unwrap(), format!("{}| a\n", usize::MAX));
    }

    #[test]
    fn numbers_past_usize_max_are_an_error() {
        let opts = NumberOptions {
            start: usize::MAX,
            ..NumberOptions::default()
        };
        let err = line_numbers("a\nb\n", &opts).unwrap_err();
        assert!(matches!(
            err,
            Error::LineNumberOverflow {
                start: usize::MAX,
                step: 1,
                lines: 2
            }
        ));
    }

    #[test]
    fn huge_step_is_an_error() {
        let opts = NumberOptions {
            step: usize::MAX,
            ..NumberOptions::default()
        };
        assert!(line_numbers("a\nb\nc\n", &opts).is_err());
        // One line never multiplies the step.
        assert_eq!(line_numbers("a", &opts).unwrap(), "1| a");
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(12_345), 5);
    }
}
