//! # cot-text: text transforms for cot-filters
//!
//! Every filter in this crate is a pure function from the text the editor
//! hands over (a selection or the whole document) to the text it should put
//! back. Nothing here touches stdin, stdout or the process; the `cotfilter`
//! binary owns all of that.
//!
//! - **[`lines`]** - line splitting that keeps terminators
//! - **[`prefix`]** - per-line prefixing and stripping (headers, lists, comments)
//! - **[`fence`]** - Markdown fenced code block wrapper
//! - **[`wrap`]** - curly-brace wrapper that respects outer blank lines
//! - **[`replace`]** - multi-pattern cascading find/replace
//! - **[`number`]** - padded line numbering
//! - **[`case`]** - case conversions (camel, snake, slug, ...)
//! - **[`stats`]** - text statistics report
//! - **[`random`]** - random alphanumeric string generator

pub mod case;
pub mod error;
pub mod fence;
pub mod lines;
pub mod number;
pub mod prefix;
pub mod random;
pub mod replace;
pub mod stats;
pub mod wrap;

pub use error::{Error, Result};
