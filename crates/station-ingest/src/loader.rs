//! Record loading and validation.

use std::io::Read;
use std::time::Instant;

use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use metrics::{counter, histogram};
use station_common::{ErrorReport, LoadError, LoadResult, ProjectId, StationRecord};
use tracing::{info, warn};

use crate::config::LoaderConfig;
use crate::schema::ColumnMap;
use crate::source::{Source, SourceKey};

/// Result of loading one source.
///
/// Either `records` holds every valid row and `errors` is empty, or
/// `records` is empty and `errors` explains why.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub source: SourceKey,
    pub records: Vec<StationRecord>,
    pub errors: Vec<LoadError>,

    /// Rows dropped for missing or out-of-range coordinates
    pub dropped_rows: usize,

    pub loaded_at: DateTime<Utc>,
}

impl LoadOutcome {
    fn success(source: SourceKey, records: Vec<StationRecord>, dropped_rows: usize) -> Self {
        Self {
            source,
            records,
            errors: Vec::new(),
            dropped_rows,
            loaded_at: Utc::now(),
        }
    }

    fn failure(source: SourceKey, error: LoadError) -> Self {
        Self {
            source,
            records: Vec::new(),
            errors: vec![error],
            dropped_rows: 0,
            loaded_at: Utc::now(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// User-facing reports for all load errors.
    pub fn reports(&self) -> Vec<ErrorReport> {
        self.errors.iter().map(ErrorReport::from).collect()
    }
}

/// Load and validate a station source.
///
/// Never fails outright: any error is returned inside the outcome next to
/// an empty record set.
pub fn load(source: &Source, config: &LoaderConfig) -> LoadOutcome {
    let key = source.key();
    let start = Instant::now();

    let result = source.open().and_then(|reader| read_records(reader, config));
    histogram!("station_load_duration_seconds").record(start.elapsed().as_secs_f64());

    match result {
        Ok((records, dropped_rows)) => {
            counter!("station_loads_total", "outcome" => "ok").increment(1);
            counter!("station_rows_dropped_total").increment(dropped_rows as u64);
            if dropped_rows > 0 {
                warn!(
                    source = %key,
                    dropped = dropped_rows,
                    "Dropped rows with missing or invalid coordinates"
                );
            }
            info!(
                source = %key,
                records = records.len(),
                dropped = dropped_rows,
                "Loaded station source"
            );
            LoadOutcome::success(key, records, dropped_rows)
        }
        Err(e) => {
            counter!("station_loads_total", "outcome" => e.kind().as_str()).increment(1);
            warn!(source = %key, kind = ?e.kind(), error = %e, "Failed to load station source");
            LoadOutcome::failure(key, e)
        }
    }
}

/// Parse every row of a delimited reader into validated records.
///
/// Returns the records and the number of rows dropped for bad coordinates.
fn read_records<R: Read>(
    reader: R,
    config: &LoaderConfig,
) -> LoadResult<(Vec<StationRecord>, usize)> {
    let delimiter = u8::try_from(config.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            LoadError::Unexpected(format!(
                "Delimiter {:?} is not a single-byte character",
                config.delimiter
            ))
        })?;

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(csv_error)?.clone();
    let columns = ColumnMap::resolve(&headers, &config.columns)?;

    let mut records = Vec::new();
    let mut dropped = 0;

    for row in csv_reader.records() {
        let row = row.map_err(csv_error)?;
        match parse_row(&row, &columns) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    Ok((records, dropped))
}

/// Build a record from one row, or `None` when its coordinates are unusable.
fn parse_row(row: &StringRecord, columns: &ColumnMap) -> Option<StationRecord> {
    let latitude = parse_coordinate(row.get(columns.latitude)?, 90.0)?;
    let longitude = parse_coordinate(row.get(columns.longitude)?, 180.0)?;
    let project = row.get(columns.project).and_then(ProjectId::parse);

    let fields: IndexMap<String, String> = columns
        .passthrough
        .iter()
        .map(|(i, name)| (name.clone(), row.get(*i).unwrap_or_default().to_string()))
        .collect();

    Some(StationRecord {
        project,
        latitude,
        longitude,
        fields,
    })
}

/// Parse a decimal-degree cell, rejecting blanks, non-finite values and
/// values outside `[-limit, limit]`.
fn parse_coordinate(raw: &str, limit: f64) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value.abs() <= limit).then_some(value)
}

fn csv_error(err: csv::Error) -> LoadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.kind() {
        csv::ErrorKind::Io(_) => LoadError::Unexpected(err.to_string()),
        csv::ErrorKind::Utf8 { .. } => {
            LoadError::Unexpected(format!("Source is not valid UTF-8: {}", err))
        }
        _ => LoadError::ParseFailure {
            line,
            message: err.to_string(),
        },
    }
}
