//! Helpers for writing and generating station sources.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temp directory.
///
/// The returned [`TempDir`] must be kept alive for the file to exist.
pub fn write_temp_source(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp source");
    (dir, path)
}

/// Generate a source with `projects` projects named `Project 0..n`, each with
/// `rows_per_project` stations. Rows are interleaved across projects so that
/// first-seen order is `Project 0, Project 1, ...`.
pub fn generate_station_csv(projects: usize, rows_per_project: usize) -> String {
    let mut csv = String::from("Lat;Lon;Project_Name\n");
    for row in 0..rows_per_project {
        for project in 0..projects {
            let lat = -30.0 - (row as f64) * 0.01;
            let lon = 17.0 + (project as f64) * 0.5;
            let _ = writeln!(csv, "{lat};{lon};Project {project}");
        }
    }
    csv
}
