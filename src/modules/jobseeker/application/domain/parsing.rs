//! Cell coercion for the preprocessed CSV.
//!
//! Every parser here coerces on error: a value that cannot be read becomes
//! `None` and is treated exactly like an empty cell downstream.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Literals written by the preprocessing step for missing values.
const MISSING_LITERALS: [&str; 6] = ["nan", "NaN", "NaT", "None", "null", "NULL"];

/// Slash and dash forms with the year last are read month-first, falling back
/// to day-first when the first field cannot be a month.
const DATETIME_FORMATS: [&str; 20] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m-%d-%Y %H:%M:%S",
    "%m-%d-%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m-%d-%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %I:%M:%S %p",
    "%d/%m/%Y %I:%M:%S %p",
];

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", "%Y/%m/%d", "%m-%d-%Y", "%m/%d/%Y", "%d-%m-%Y", "%d/%m/%Y",
];

/// Trims a raw cell and maps empty cells and missing-value literals to `None`.
pub fn clean_cell(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || MISSING_LITERALS.contains(&trimmed) {
        None
    } else {
        Some(trimmed)
    }
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let value = clean_cell(raw)?;

    // Offsets are normalised to UTC so both dates of a row share one timeline.
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub fn parse_number(raw: &str) -> Option<f64> {
    clean_cell(raw)?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn parse_text(raw: &str) -> Option<String> {
    clean_cell(raw).map(str::to_string)
}
