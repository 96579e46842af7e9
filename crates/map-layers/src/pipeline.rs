//! One render pass: filter, build layers, describe the view.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use station_common::{
    Color, ErrorReport, LayerSpec, LegendSpec, MapView, MapViewConfig, Palette, ProjectId,
    StationRecord,
};
use metrics::{counter, histogram};
use station_ingest::LoadOutcome;
use tracing::debug;

use crate::builder::LayerBuilder;
use crate::catalog::ProjectCatalog;
use crate::colors::{assign_colors, ColorAssignment};
use crate::filter::filter_records;
use crate::selection::Selection;

/// Styling and view settings applied to every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default)]
    pub palette: Palette,

    /// Color for projects without an assignment
    #[serde(default = "Color::fallback")]
    pub fallback_color: Color,

    #[serde(default)]
    pub map: MapViewConfig,

    /// Whether renders include a legend unless the caller says otherwise
    #[serde(default = "default_true")]
    pub legend: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            fallback_color: Color::fallback(),
            map: MapViewConfig::default(),
            legend: true,
        }
    }
}

impl RenderSettings {
    pub fn layer_builder(&self) -> LayerBuilder {
        LayerBuilder {
            marker: self.map.marker,
            fallback_color: self.fallback_color.clone(),
            legend_title: self.map.legend_title.clone(),
        }
    }
}

/// A loaded source with its catalog and colors, computed once per load.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub outcome: Arc<LoadOutcome>,
    pub catalog: ProjectCatalog,
    pub colors: ColorAssignment,
}

impl Dataset {
    pub fn from_outcome(outcome: Arc<LoadOutcome>, palette: &Palette) -> Self {
        let catalog = ProjectCatalog::from_records(&outcome.records);
        let colors = assign_colors(&catalog, palette);
        Self {
            outcome,
            catalog,
            colors,
        }
    }

    pub fn records(&self) -> &[StationRecord] {
        &self.outcome.records
    }

    /// Whether `outcome` is the exact load this dataset was derived from.
    pub fn is_from(&self, outcome: &Arc<LoadOutcome>) -> bool {
        Arc::ptr_eq(&self.outcome, outcome)
    }

    /// One toggle per catalog project, in catalog order.
    pub fn toggles(&self, selection: &Selection) -> Vec<ProjectToggle> {
        self.colors
            .iter()
            .map(|(id, color)| ProjectToggle {
                project_id: id.clone(),
                color: color.clone(),
                selected: selection.contains(id),
            })
            .collect()
    }
}

/// One checkbox in the project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectToggle {
    pub project_id: ProjectId,
    pub color: Color,
    pub selected: bool,
}

/// Everything the UI and map client need for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRender {
    /// Every catalog project in order, with its color and selection state
    pub projects: Vec<ProjectToggle>,
    pub layers: Vec<LayerSpec>,
    pub legend: Option<LegendSpec>,
    pub view: MapView,

    /// Load problems to show next to the (possibly empty) map
    pub errors: Vec<ErrorReport>,
    pub dropped_rows: usize,
}

impl MapRender {
    pub fn point_count(&self) -> usize {
        self.layers.iter().map(LayerSpec::point_count).sum()
    }
}

/// Run filter and layer building for one selection.
pub fn render(
    dataset: &Dataset,
    selection: &Selection,
    settings: &RenderSettings,
    legend_requested: bool,
) -> MapRender {
    let filtered = filter_records(dataset.records(), selection);
    let set = settings
        .layer_builder()
        .build(filtered.iter().copied(), &dataset.colors, legend_requested);

    let view = if set.is_empty() {
        MapView::empty(&settings.map)
    } else {
        MapView::with_bounds(&settings.map, set.bounds())
    };

    counter!("station_renders_total").increment(1);
    histogram!("station_render_layers").record(set.layers.len() as f64);
    histogram!("station_render_points").record(set.point_count() as f64);

    debug!(
        selected = selection.len(),
        records = filtered.len(),
        layers = set.layers.len(),
        legend = set.legend.is_some(),
        "Rendered station layers"
    );

    MapRender {
        projects: dataset.toggles(selection),
        layers: set.layers,
        legend: set.legend,
        view,
        errors: dataset.outcome.reports(),
        dropped_rows: dataset.outcome.dropped_rows,
    }
}
