//! Common types and utilities shared across the station map crates.

pub mod bbox;
pub mod error;
pub mod layer;
pub mod record;
pub mod style;
pub mod view;

pub use bbox::BoundingBox;
pub use error::{ErrorKind, ErrorReport, LoadError, LoadResult};
pub use layer::{LayerSpec, LegendEntry, LegendSpec, MarkerStyle};
pub use record::{ProjectId, StationRecord};
pub use style::{Color, Palette, StyleError};
pub use view::{LatLon, MapView, MapViewConfig};
