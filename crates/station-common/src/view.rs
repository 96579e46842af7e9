//! Initial map view and basemap settings.

use serde::{Deserialize, Serialize};

use crate::{BoundingBox, MarkerStyle};

/// A `(lat, lon)` position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Static map settings, typically read from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewConfig {
    #[serde(default = "default_center")]
    pub center: LatLon,

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Basemap drawn under the layers
    #[serde(default = "default_basemap")]
    pub basemap: String,

    #[serde(default)]
    pub marker: MarkerStyle,

    #[serde(default = "default_legend_title")]
    pub legend_title: String,
}

fn default_center() -> LatLon {
    // South African coastline
    LatLon {
        lat: -35.0,
        lon: 21.0,
    }
}

fn default_zoom() -> u8 {
    6
}

fn default_basemap() -> String {
    "OpenStreetMap".to_string()
}

fn default_legend_title() -> String {
    "Projects".to_string()
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
            basemap: default_basemap(),
            marker: MarkerStyle::default(),
            legend_title: default_legend_title(),
        }
    }
}

/// View description accompanying one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLon,
    pub zoom: u8,
    pub basemap: String,

    /// Whether the client should show a layer toggle control
    pub layer_control: bool,

    /// Extent of all drawn points
    pub bounds: Option<BoundingBox>,
}

impl MapView {
    /// Basemap-only view, used when nothing is drawn.
    pub fn empty(config: &MapViewConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
            basemap: config.basemap.clone(),
            layer_control: false,
            bounds: None,
        }
    }

    /// View over drawn layers with the given extent.
    pub fn with_bounds(config: &MapViewConfig, bounds: Option<BoundingBox>) -> Self {
        Self {
            layer_control: bounds.is_some(),
            bounds,
            ..Self::empty(config)
        }
    }
}
