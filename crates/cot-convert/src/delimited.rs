//! CSV ⇄ JSON conversion.
//!
//! CSV → JSON reads the first record as the header and turns every later
//! record into an object keyed by it. All values stay strings.
//!
//! | Record shape              | Object                                   |
//! |---------------------------|------------------------------------------|
//! | as many fields as header  | one key per header                       |
//! | fewer fields              | missing keys are `null`                  |
//! | more fields               | the extras go in an array under `"null"` |
//!
//! JSON → CSV accepts three shapes:
//!
//! - an array of objects: the first object's keys are the header row
//! - an array of arrays (or scalars): one record per element, no header
//! - an object: `Key,Value` rows, or only a header row built from the keys
//!   of objects nested in array values
//!
//! Empty-ish JSON (`null`, `false`, `0`, `""`, `[]`, `{}`) and any other
//! scalar produce no output.

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use serde_json::{Map, Value as Json};

use crate::error::{Error, Result};

/// Key for fields beyond the header.
const EXTRA_FIELDS_KEY: &str = "null";

// ---------------------------------------------------------------------------
// CSV → JSON
// ---------------------------------------------------------------------------

/// Parse CSV with a header row and emit a pretty-printed JSON array of
/// objects.
///
/// # Errors
///
/// [`Error::Csv`] if the CSV cannot be read.
pub fn csv_to_json(input: &str) -> Result<String> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(input.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(Json::Object(record_object(&headers, &record?)));
    }
    log::debug!("csv-to-json: {} columns, {} rows", headers.len(), rows.len());
    Ok(serde_json::to_string_pretty(&Json::Array(rows))?)
}

fn record_object(headers: &StringRecord, record: &StringRecord) -> Map<String, Json> {
    let mut object = Map::with_capacity(headers.len() + 1);
    for (index, header) in headers.iter().enumerate() {
        let value = record
            .get(index)
            .map_or(Json::Null, |field| Json::String(field.to_string()));
        object.insert(header.to_string(), value);
    }
    if record.len() > headers.len() {
        let extra = record
            .iter()
            .skip(headers.len())
            .map(|field| Json::String(field.to_string()))
            .collect();
        object.insert(EXTRA_FIELDS_KEY.to_string(), Json::Array(extra));
    }
    object
}

// ---------------------------------------------------------------------------
// JSON → CSV
// ---------------------------------------------------------------------------

type CsvWriter = csv::Writer<Vec<u8>>;

/// Parse JSON and emit CSV records separated by `\n`.
///
/// # Errors
///
/// [`Error::Json`] if `input` is not valid JSON, [`Error::Shape`] if an
/// array of objects has a row that does not fit the header.
pub fn json_to_csv(input: &str) -> Result<String> {
    let value: Json = serde_json::from_str(input)?;
    if is_empty_value(&value) {
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    match &value {
        Json::Array(items) => write_array(&mut writer, items)?,
        Json::Object(map) => write_object(&mut writer, map)?,
        _ => {}
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_array(writer: &mut CsvWriter, items: &[Json]) -> Result<()> {
    let Some(Json::Object(first)) = items.first() else {
        for item in items {
            match item {
                Json::Array(fields) => writer.write_record(fields.iter().map(cell))?,
                scalar => writer.write_record([cell(scalar)])?,
            }
        }
        return Ok(());
    };

    let header: Vec<&str> = first.keys().map(String::as_str).collect();
    writer.write_record(&header)?;
    for (index, item) in items.iter().enumerate() {
        let row = index + 1;
        let Json::Object(object) = item else {
            return Err(Error::Shape(format!("row {row} is not an object")));
        };
        if let Some(key) = object.keys().find(|k| !header.contains(&k.as_str())) {
            return Err(Error::Shape(format!(
                "row {row} has field `{key}`, which is not in the header"
            )));
        }
        writer.write_record(
            header
                .iter()
                .map(|key| object.get(*key).map_or_else(String::new, cell)),
        )?;
    }
    Ok(())
}

fn write_object(writer: &mut CsvWriter, map: &Map<String, Json>) -> Result<()> {
    let mut nested_keys: Vec<&str> = Vec::new();
    for value in map.values() {
        let Json::Array(items) = value else { continue };
        for item in items {
            let Json::Object(object) = item else { continue };
            for key in object.keys() {
                if !nested_keys.contains(&key.as_str()) {
                    nested_keys.push(key);
                }
            }
        }
    }

    // Only the header is written for nested records; their rows are not
    // flattened.
    if !nested_keys.is_empty() {
        writer.write_record(&nested_keys)?;
        return Ok(());
    }

    writer.write_record(["Key", "Value"])?;
    for (key, value) in map {
        writer.write_record([key.clone(), cell(value)])?;
    }
    Ok(())
}

/// One CSV field: strings as is, `null` as empty, anything else as JSON.
fn cell(value: &Json) -> String {
    match value {
        Json::Null => String::new(),
        Json::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_empty_value(value: &Json) -> bool {
    match value {
        Json::Null => true,
        Json::Bool(b) => !b,
        Json::Number(n) => n.as_f64() == Some(0.0),
        Json::String(s) => s.is_empty(),
        Json::Array(items) => items.is_empty(),
        Json::Object(map) => map.is_empty(),
    }
}
