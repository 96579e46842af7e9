//! Loader configuration: delimiter and accepted header spellings.

use serde::{Deserialize, Serialize};

/// Canonical field names every record is normalized to.
pub mod canonical {
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const PROJECT: &str = "project";
}

/// How to read a station source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Field separator (single-byte character)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Header spellings accepted for each canonical field
    #[serde(default)]
    pub columns: ColumnAliases,
}

fn default_delimiter() -> char {
    ';'
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            columns: ColumnAliases::default(),
        }
    }
}

/// Header aliases per canonical field. Matching ignores case and surrounding
/// whitespace; the first matching column wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAliases {
    #[serde(default = "default_latitude_aliases")]
    pub latitude: Vec<String>,

    #[serde(default = "default_longitude_aliases")]
    pub longitude: Vec<String>,

    #[serde(default = "default_project_aliases")]
    pub project: Vec<String>,
}

fn aliases(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn default_latitude_aliases() -> Vec<String> {
    aliases(&["Lat", "latitude", "lat_dd"])
}

fn default_longitude_aliases() -> Vec<String> {
    aliases(&["Lon", "Lng", "Long", "longitude", "lon_dd"])
}

fn default_project_aliases() -> Vec<String> {
    aliases(&["Project_Name", "project", "projectname"])
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            latitude: default_latitude_aliases(),
            longitude: default_longitude_aliases(),
            project: default_project_aliases(),
        }
    }
}
