//! Header resolution.
//!
//! Maps source header spellings onto the canonical fields before any row is
//! read, so a source without coordinates is rejected up front with the
//! missing columns named.

use std::collections::HashSet;

use csv::StringRecord;
use station_common::{LoadError, LoadResult};
use tracing::warn;

use crate::config::{canonical, ColumnAliases};

/// Column positions of the canonical fields plus the passthrough columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub latitude: usize,
    pub longitude: usize,
    pub project: usize,

    /// `(index, header)` for every other column, in source order. A repeated
    /// header gets a `_2`, `_3`, ... suffix so no value is lost.
    pub passthrough: Vec<(usize, String)>,
}

impl ColumnMap {
    /// Resolve a header row against the configured aliases.
    pub fn resolve(headers: &StringRecord, aliases: &ColumnAliases) -> LoadResult<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

        let find = |names: &[String]| {
            normalized
                .iter()
                .position(|header| names.iter().any(|name| normalize_header(name) == *header))
        };

        let latitude = find(&aliases.latitude);
        let longitude = find(&aliases.longitude);
        let project = find(&aliases.project);

        match (latitude, longitude, project) {
            (Some(latitude), Some(longitude), Some(project)) => {
                let passthrough = passthrough_columns(headers, &[latitude, longitude, project]);

                Ok(Self {
                    latitude,
                    longitude,
                    project,
                    passthrough,
                })
            }
            _ => {
                let missing = [
                    (latitude, canonical::LATITUDE),
                    (longitude, canonical::LONGITUDE),
                    (project, canonical::PROJECT),
                ]
                .into_iter()
                .filter(|(found, _)| found.is_none())
                .map(|(_, name)| name.to_string())
                .collect();

                Err(LoadError::SchemaInvalid { missing })
            }
        }
    }
}

fn passthrough_columns(headers: &StringRecord, required: &[usize]) -> Vec<(usize, String)> {
    let mut used = HashSet::new();
    headers
        .iter()
        .enumerate()
        .filter(|(i, _)| !required.contains(i))
        .map(|(i, raw)| {
            let header = clean_header(raw);
            let mut name = header.to_string();
            let mut n = 1;
            while used.contains(&name) {
                n += 1;
                name = format!("{}_{}", header, n);
            }
            if n > 1 {
                warn!(column = i + 1, header, renamed = %name, "Duplicate column header");
            }
            used.insert(name.clone());
            (i, name)
        })
        .collect()
}

/// Strip a byte-order mark and surrounding whitespace.
fn clean_header(raw: &str) -> &str {
    raw.trim_start_matches('\u{feff}').trim()
}

fn normalize_header(raw: &str) -> String {
    clean_header(raw).to_lowercase()
}
