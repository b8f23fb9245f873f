use std::io::Cursor;

use csv::{ReaderBuilder, Trim};
use serde_json::{Map, Value};

use crate::domain::error::{AppError, AppResult};

pub const REQUIRED_COLUMNS: [&str; 2] = ["email", "first_name"];

const PREVIEW_ROWS: usize = 5;

pub type Row = Map<String, Value>;

/// Checks the column set of an uploaded recipient list and returns the first rows.
///
/// Every schema problem is reported at once: one entry per missing required
/// column plus a single entry naming all unexpected columns.
pub fn validate_recipient_csv(data: &[u8]) -> AppResult<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(Trim::All)
        .from_reader(Cursor::new(data));

    let headers = reader
        .headers()
        .map_err(|error| unreadable(error.to_string()))?
        .iter()
        .map(|header| header.to_string())
        .collect::<Vec<_>>();

    if headers.iter().all(|header| header.is_empty()) {
        return Err(unreadable("No columns to parse from file".to_string()));
    }

    let mut errors = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .map(|column| format!("Missing required column: {column}"))
        .collect::<Vec<_>>();

    let extra = headers
        .iter()
        .filter(|header| !REQUIRED_COLUMNS.contains(&header.as_str()))
        .map(String::as_str)
        .collect::<Vec<_>>();

    if !extra.is_empty() {
        errors.push(format!("Extra columns found: {}", extra.join(", ")));
    }

    if !errors.is_empty() {
        return Err(AppError::BadRequest("CSV file failed column validation.").errors(errors));
    }

    let mut preview = Vec::with_capacity(PREVIEW_ROWS);

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|error| unreadable(error.to_string()))?;

        if index < PREVIEW_ROWS {
            preview.push(
                headers
                    .iter()
                    .zip(record.iter())
                    .map(|(header, value)| (header.clone(), Value::String(value.to_string())))
                    .collect::<Row>(),
            );
        }
    }

    Ok(preview)
}

fn unreadable(reason: String) -> AppError {
    AppError::BadRequest("CSV file could not be read.").errors(vec![reason])
}
