//! Offline consistency checks for annotation inputs.
//!
//! Extraction does not validate inline; this pass asserts the record
//! invariants over a prepared file and fails on the first violation.
use std::path::Path;

use log::info;
use serde_json::Value;

use crate::error::Error;
use crate::io::reader::JsonlFileReader;

/// Fields that must exist and be string-or-null.
const NULLABLE_STRING_FIELDS: [&str; 3] = ["title", "author", "date"];

/// Validate every record of a prepared `.jsonl` file.
///
/// Returns the number of valid records, or [Error::Validation] naming the
/// first offending line and invariant.
pub fn validate_file(src: &Path) -> Result<usize, Error> {
    let mut count = 0;
    for (idx, value) in JsonlFileReader::from_path(src)?.enumerate() {
        let line = idx + 1;
        validate_record(&value?).map_err(|violation| {
            Error::Validation(format!("{:?} line {line}: {violation}", src))
        })?;
        count += 1;
    }
    info!("{} records valid in {:?}", count, src);
    Ok(count)
}

/// Check one record against the corpus invariants.
pub fn validate_record(value: &Value) -> Result<(), String> {
    let record = value
        .as_object()
        .ok_or_else(|| "record is not an object".to_string())?;

    match record.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => {}
        Some(Value::String(_)) => return Err("id is empty".to_string()),
        Some(_) => return Err("id is not a string".to_string()),
        None => return Err("id is missing".to_string()),
    }

    for field in NULLABLE_STRING_FIELDS {
        match record.get(field) {
            Some(Value::String(_)) | Some(Value::Null) => {}
            Some(_) => return Err(format!("{field} is neither string nor null")),
            None => return Err(format!("{field} is missing")),
        }
    }

    match record.get("text") {
        Some(Value::Array(paragraphs)) => {
            if paragraphs.is_empty() {
                return Err("text is empty".to_string());
            }
            if !paragraphs.iter().all(Value::is_string) {
                return Err("text contains non-string paragraphs".to_string());
            }
        }
        Some(_) => return Err("text is not an array".to_string()),
        None => return Err("text is missing".to_string()),
    }

    Ok(())
}
