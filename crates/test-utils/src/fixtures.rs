//! Common station sources for tests.
//!
//! All sources are semicolon-delimited with a header row, matching the
//! sampling-station exports the loader is built for.

/// Three rows across two projects, using the short `Lat`/`Lon` headers.
pub const TWO_PROJECTS: &str = "Lat;Lon;Project_Name\n1;1;P1\n2;2;P1\n3;3;P2\n";

/// Same shape as [`TWO_PROJECTS`] but without a longitude column.
pub const MISSING_LONGITUDE: &str = "Lat;Project_Name\n1;P1\n2;P1\n3;P2\n";

/// Header only, no rows.
pub const HEADER_ONLY: &str = "Lat;Lon;Project_Name\n";

/// Row 3 has an extra field.
pub const RAGGED_ROW: &str = "Lat;Lon;Project_Name\n1;1;P1\n2;2;P1;oops\n3;3;P2\n";

/// Coastal stations with passthrough columns, a blank project, a station
/// without coordinates and one with an out-of-range latitude.
pub const COASTAL: &str = "\
Station;Lat;Lon;Project_Name;Depth_m
SB01;-33.9;18.4;Benguela Upwelling;35
AB01;-33.8;25.7;Algoa Bay;12
SB02;-34.1;18.3;Benguela Upwelling;60
XX01;-34.0;20.0;;5
AB02;;25.9;Algoa Bay;8
KZ01;-29.8;31.1;KZN Bight;40
AB03;-33.9;25.8;Algoa Bay;15
BAD1;-134.0;22.0;KZN Bight;1
";

/// Long-form canonical headers in mixed case with a byte-order mark.
pub const CANONICAL_HEADERS_WITH_BOM: &str =
    "\u{feff}LATITUDE ; Longitude ;project\n-34.0;18.5;P1\n";

/// Project names from [`COASTAL`] in first-seen order.
pub const COASTAL_PROJECTS: [&str; 3] = ["Benguela Upwelling", "Algoa Bay", "KZN Bight"];
