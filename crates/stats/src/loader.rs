//! Telemetry input loading from CSV and JSON files.
//!
//! Both loaders produce the same [`TelemetryRow`] sequence. Numeric
//! fields must parse as finite numbers; times accept RFC 3339 strings
//! or epoch seconds. Out-of-range positions are kept but logged, since
//! coordinate math is defined for any real input.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, StatsError};
use crate::row::TelemetryRow;

/// Required input columns, in canonical order.
const COLUMNS: [&str; 5] = ["time", "latitude", "longitude", "altitude", "speed"];

/// Loads telemetry rows, picking the format from the file extension.
///
/// # Errors
/// Returns [`StatsError::UnknownFormat`] for extensions other than
/// `.csv` and `.json`, plus any error of the underlying loader.
pub fn load_rows(path: &Path) -> Result<Vec<TelemetryRow>> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => load_csv(path),
        Some("json") => load_json(path),
        _ => Err(StatsError::UnknownFormat(path.display().to_string())),
    }
}

/// Loads rows from a CSV file with a header row.
pub fn load_csv(path: &Path) -> Result<Vec<TelemetryRow>> {
    read_csv(File::open(path)?)
}

/// Loads rows from a JSON file holding an array of row objects.
pub fn load_json(path: &Path) -> Result<Vec<TelemetryRow>> {
    read_json(File::open(path)?)
}

/// Reads CSV telemetry with a header row from any reader.
///
/// Column order is free and header matching ignores case; extra columns
/// are ignored.
///
/// # Errors
/// Returns [`StatsError::MissingColumn`] when a required column is
/// absent and [`StatsError::InvalidRow`] when a field fails to parse.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<TelemetryRow>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut columns = [0usize; COLUMNS.len()];
    for (slot, name) in columns.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(name))
            .ok_or(StatsError::MissingColumn(name))?;
    }
    let [time_column, lat_column, lon_column, alt_column, speed_column] = columns;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line()) as usize;

        let row = TelemetryRow {
            time: parse_time(field(&record, time_column), "time", line)?,
            latitude: parse_number(field(&record, lat_column), "latitude", line)?,
            longitude: parse_number(field(&record, lon_column), "longitude", line)?,
            altitude: parse_number(field(&record, alt_column), "altitude", line)?,
            speed: parse_number(field(&record, speed_column), "speed", line)?,
        };
        check_position(&row, line);
        rows.push(row);
    }

    debug!(rows = rows.len(), "Loaded CSV telemetry");
    Ok(rows)
}

/// A JSON row before field validation. Absent fields default to `null`
/// and fail with the field's name instead of a serde error.
#[derive(Debug, Deserialize)]
struct RawJsonRow {
    #[serde(default)]
    time: Value,
    #[serde(default)]
    latitude: Value,
    #[serde(default)]
    longitude: Value,
    #[serde(default)]
    altitude: Value,
    #[serde(default)]
    speed: Value,
}

/// Reads a JSON array of telemetry objects from any reader.
///
/// # Errors
/// Returns [`StatsError::Json`] when the document is not an array of
/// objects and [`StatsError::InvalidRow`] when a field is missing or
/// fails to parse.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<TelemetryRow>> {
    let raw: Vec<RawJsonRow> = serde_json::from_reader(reader)?;

    let mut rows = Vec::with_capacity(raw.len());
    for (index, record) in raw.iter().enumerate() {
        let line = index + 1;

        let row = TelemetryRow {
            time: time_value(&record.time, "time", line)?,
            latitude: numeric_value(&record.latitude, "latitude", line)?,
            longitude: numeric_value(&record.longitude, "longitude", line)?,
            altitude: numeric_value(&record.altitude, "altitude", line)?,
            speed: numeric_value(&record.speed, "speed", line)?,
        };
        check_position(&row, line);
        rows.push(row);
    }

    debug!(rows = rows.len(), "Loaded JSON telemetry");
    Ok(rows)
}

fn field<'r>(record: &'r csv::StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("")
}

fn invalid(line: usize, field: &'static str, value: &str) -> StatsError {
    StatsError::InvalidRow {
        line,
        field,
        value: value.to_string(),
    }
}

/// Parses a finite float. `NaN` and infinities are rejected so they
/// never reach the aggregator.
fn parse_number(value: &str, field: &'static str, line: usize) -> Result<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| invalid(line, field, value))?;

    if !parsed.is_finite() {
        return Err(invalid(line, field, value));
    }
    Ok(parsed)
}

/// Parses a capture time from RFC 3339 text or epoch seconds.
fn parse_time(value: &str, field: &'static str, line: usize) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(time.with_timezone(&Utc));
    }
    if let Ok(seconds) = trimmed.parse::<f64>() {
        if let Some(time) = epoch_seconds_to_time(seconds) {
            return Ok(time);
        }
    }

    Err(invalid(line, field, value))
}

fn epoch_seconds_to_time(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

fn numeric_value(value: &Value, field: &'static str, line: usize) -> Result<f64> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .filter(|parsed| parsed.is_finite())
            .ok_or_else(|| invalid(line, field, &number.to_string())),
        Value::String(text) => parse_number(text, field, line),
        other => Err(invalid(line, field, &other.to_string())),
    }
}

fn time_value(value: &Value, field: &'static str, line: usize) -> Result<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_time(text, field, line),
        Value::Number(number) => number
            .as_f64()
            .and_then(epoch_seconds_to_time)
            .ok_or_else(|| invalid(line, field, &number.to_string())),
        other => Err(invalid(line, field, &other.to_string())),
    }
}

fn check_position(row: &TelemetryRow, line: usize) {
    if !row.coordinate().is_valid() {
        warn!(
            line,
            latitude = row.latitude,
            longitude = row.longitude,
            "Position outside standard degree ranges"
        );
    }
}
