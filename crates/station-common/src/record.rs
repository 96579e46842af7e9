//! Station records and project identifiers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier of a monitoring project (a named group of stations).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a raw cell value. Blank cells carry no project.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One validated sampling location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Owning project, absent when the source cell was blank
    pub project: Option<ProjectId>,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Remaining source columns keyed by their original header, in source order
    #[serde(default)]
    pub fields: IndexMap<String, String>,
}

impl StationRecord {
    pub fn new(project: Option<ProjectId>, latitude: f64, longitude: f64) -> Self {
        Self {
            project,
            latitude,
            longitude,
            fields: IndexMap::new(),
        }
    }

    /// Attach a passthrough column value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Position as a `(lon, lat)` pair, the order map layers expect.
    pub fn lon_lat(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    /// Check whether this record belongs to the given project.
    pub fn is_in(&self, project: &ProjectId) -> bool {
        self.project.as_ref() == Some(project)
    }
}
