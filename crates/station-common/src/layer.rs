//! Layer and legend specifications handed to the map renderer.

use serde::{Deserialize, Serialize};

use crate::{BoundingBox, Color, ProjectId};

/// Circle-marker styling shared by all points of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Marker radius in pixels
    #[serde(default = "default_radius")]
    pub radius: u32,

    /// Whether the marker outline is drawn
    #[serde(default = "default_true")]
    pub stroke: bool,

    /// Fill opacity in [0, 1]
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f32,
}

fn default_radius() -> u32 {
    3
}

fn default_true() -> bool {
    true
}

fn default_fill_opacity() -> f32 {
    0.7
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            stroke: true,
            fill_opacity: default_fill_opacity(),
        }
    }
}

/// One drawable layer: every point of a single project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub project_id: ProjectId,

    /// Stroke and fill color of the markers
    pub color: Color,

    /// Points as `(lon, lat)` pairs, in source order
    pub points: Vec<(f64, f64)>,

    /// Human-readable label (the project identifier)
    pub label: String,

    /// Name shown in the map's layer control
    pub name: String,

    pub style: MarkerStyle,
}

impl LayerSpec {
    pub fn new(project_id: ProjectId, color: Color, style: MarkerStyle) -> Self {
        let label = project_id.to_string();
        let name = format!("{} Layer", label);
        Self {
            project_id,
            color,
            points: Vec::new(),
            label,
            name,
            style,
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Extent of this layer's points.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points.iter().copied())
    }
}

/// One row of the legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub project_id: ProjectId,
    pub color: Color,
}

/// Legend listing every drawn layer, in layer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendSpec {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl LegendSpec {
    /// Build a legend with one entry per layer.
    pub fn for_layers(title: impl Into<String>, layers: &[LayerSpec]) -> Self {
        Self {
            title: title.into(),
            entries: layers
                .iter()
                .map(|layer| LegendEntry {
                    project_id: layer.project_id.clone(),
                    color: layer.color.clone(),
                })
                .collect(),
        }
    }
}
