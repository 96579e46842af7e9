//! Station source loading.
//!
//! Reads a semicolon-delimited, UTF-8 station export, resolves its headers to
//! the canonical `latitude`/`longitude`/`project` fields and validates every
//! row. Failures come back as a [`LoadError`](station_common::LoadError) next to
//! an empty record set; loading never panics and never partially succeeds.
//!
//! ```ignore
//! use station_ingest::{LoadCache, LoaderConfig, Source};
//!
//! let mut cache = LoadCache::new(LoaderConfig::default());
//! let outcome = cache.get_or_load(&Source::path("data/dffe_sampling_Stations.csv"));
//! println!("{} stations", outcome.records.len());
//! ```

pub mod cache;
pub mod config;
pub mod loader;
pub mod schema;
pub mod source;

pub use cache::{CacheStats, LoadCache};
pub use config::{ColumnAliases, LoaderConfig};
pub use loader::{load, LoadOutcome};
pub use schema::ColumnMap;
pub use source::{Source, SourceKey};
