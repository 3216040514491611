//! # cot-convert: structured data conversions for cot-filters
//!
//! Converts a selection between JSON and YAML, and between CSV and JSON. Unlike the text filters in
//! `cot-text`, a parse failure here is an ordinary outcome: the error
//! message becomes the output so the user sees it in place of the
//! selection.
//!
//! - **[`convert`]** - the [`Conversion`] kinds and the YAML value mapping
//! - **[`delimited`]** - CSV records to and from JSON
//! - **[`error`]** - parse and mapping errors

pub mod convert;
pub mod delimited;
pub mod error;

pub use convert::{Conversion, json_to_yaml, yaml_to_json};
pub use delimited::{csv_to_json, json_to_csv};
pub use error::{Error, Result};
