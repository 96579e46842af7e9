//! Station records to map layers.
//!
//! The pipeline runs once per render:
//! - [`ProjectCatalog`]: distinct projects in first-seen order
//! - [`assign_colors`]: palette color per catalog position
//! - [`filter_records`]: rows whose project is in the [`Selection`]
//! - [`LayerBuilder`]: one layer per project plus an optional legend
//!
//! [`SessionState`] ties these to a memoized source load and the caller's
//! selection.

pub mod builder;
pub mod catalog;
pub mod colors;
pub mod filter;
pub mod pipeline;
pub mod selection;
pub mod session;

pub use builder::{build_layers, LayerBuilder, LayerSet};
pub use catalog::ProjectCatalog;
pub use colors::{assign_colors, ColorAssignment};
pub use filter::filter_records;
pub use pipeline::{render, Dataset, MapRender, ProjectToggle, RenderSettings};
pub use selection::Selection;
pub use session::SessionState;
