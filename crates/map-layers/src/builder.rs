//! Layer builder: filtered records to layer and legend specifications.

use indexmap::IndexMap;
use serde::Serialize;
use station_common::{
    BoundingBox, Color, LayerSpec, LegendSpec, MarkerStyle, ProjectId, StationRecord,
};

use crate::colors::ColorAssignment;

/// Layers to draw plus the optional legend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayerSet {
    pub layers: Vec<LayerSpec>,
    pub legend: Option<LegendSpec>,
}

impl LayerSet {
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Extent of every drawn point.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.layers
            .iter()
            .filter_map(LayerSpec::bounds)
            .reduce(|a, b| a.union(&b))
    }

    pub fn point_count(&self) -> usize {
        self.layers.iter().map(LayerSpec::point_count).sum()
    }
}

/// Builds layers with a fixed marker style, fallback color and legend title.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerBuilder {
    pub marker: MarkerStyle,
    pub fallback_color: Color,
    pub legend_title: String,
}

impl Default for LayerBuilder {
    fn default() -> Self {
        Self {
            marker: MarkerStyle::default(),
            fallback_color: Color::fallback(),
            legend_title: "Projects".to_string(),
        }
    }
}

impl LayerBuilder {
    /// Group `filtered` by project into one layer each.
    ///
    /// Layers follow catalog order (the order of `colors`); projects missing
    /// from `colors` come last in first-seen order and use the fallback
    /// color. Records without a project are skipped. The legend is present
    /// only when requested and at least one layer exists.
    pub fn build<'a, I>(
        &self,
        filtered: I,
        colors: &ColorAssignment,
        legend_requested: bool,
    ) -> LayerSet
    where
        I: IntoIterator<Item = &'a StationRecord>,
    {
        let mut groups: IndexMap<&ProjectId, Vec<(f64, f64)>> = IndexMap::new();
        for record in filtered {
            if let Some(project) = record.project.as_ref() {
                groups.entry(project).or_default().push(record.lon_lat());
            }
        }

        // Stable, so unknown projects keep their first-seen order
        groups.sort_by(|a, _, b, _| {
            let rank = |p: &ProjectId| colors.position(p).unwrap_or(usize::MAX);
            rank(*a).cmp(&rank(*b))
        });

        let layers: Vec<LayerSpec> = groups
            .into_iter()
            .map(|(project, points)| {
                let color = colors.color_or(project, &self.fallback_color).clone();
                let mut layer = LayerSpec::new(project.clone(), color, self.marker);
                layer.points = points;
                layer
            })
            .collect();

        let legend = (legend_requested && !layers.is_empty())
            .then(|| LegendSpec::for_layers(self.legend_title.clone(), &layers));

        LayerSet { layers, legend }
    }
}

/// Build layers with the default marker style, gray fallback and "Projects" legend title.
pub fn build_layers<'a, I>(
    filtered: I,
    colors: &ColorAssignment,
    legend_requested: bool,
) -> LayerSet
where
    I: IntoIterator<Item = &'a StationRecord>,
{
    LayerBuilder::default().build(filtered, colors, legend_requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assign_colors, ProjectCatalog};
    use station_common::Palette;

    fn records() -> Vec<StationRecord> {
        vec![
            StationRecord::new(Some("P1".into()), 1.0, 1.0),
            StationRecord::new(Some("P2".into()), 3.0, 3.0),
            StationRecord::new(Some("P1".into()), 2.0, 2.0),
        ]
    }

    #[test]
    fn test_empty_input_has_no_layers_or_legend() {
        let colors = ColorAssignment::default();
        for legend in [true, false] {
            let set = build_layers(Vec::<&StationRecord>::new(), &colors, legend);
            assert!(set.is_empty());
            assert!(set.legend.is_none());
        }
    }

    #[test]
    fn test_one_layer_per_project() {
        let records = records();
        let colors = assign_colors(&ProjectCatalog::from_records(&records), &Palette::default());
        let set = build_layers(&records, &colors, true);

        assert_eq!(set.layers.len(), 2);
        assert_eq!(set.layers[0].project_id, ProjectId::new("P1"));
        assert_eq!(set.layers[0].points, vec![(1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(set.layers[1].color, Color::new("red"));
        assert_eq!(set.point_count(), 3);

        let legend = set.legend.unwrap();
        assert_eq!(legend.title, "Projects");
        assert_eq!(legend.entries.len(), 2);
        assert_eq!(legend.entries[1].project_id, ProjectId::new("P2"));
    }

    #[test]
    fn test_legend_not_requested() {
        let records = records();
        let colors = assign_colors(&ProjectCatalog::from_records(&records), &Palette::default());
        assert!(build_layers(&records, &colors, false).legend.is_none());
    }

    #[test]
    fn test_layers_follow_catalog_order_not_input_order() {
        let catalog_records = records();
        let colors = assign_colors(
            &ProjectCatalog::from_records(&catalog_records),
            &Palette::default(),
        );

        // P2 appears first in this input, but the catalog lists P1 first
        let reordered = vec![
            StationRecord::new(Some("P2".into()), 3.0, 3.0),
            StationRecord::new(Some("P1".into()), 1.0, 1.0),
        ];
        let set = build_layers(&reordered, &colors, false);
        let order: Vec<&str> = set.layers.iter().map(|l| l.project_id.as_str()).collect();
        assert_eq!(order, vec!["P1", "P2"]);
    }

    #[test]
    fn test_unknown_project_uses_fallback_and_goes_last() {
        let colors = assign_colors(
            &ProjectCatalog::from_records(&vec![StationRecord::new(Some("P1".into()), 0.0, 0.0)]),
            &Palette::default(),
        );
        let input = vec![
            StationRecord::new(Some("New".into()), 5.0, 5.0),
            StationRecord::new(Some("P1".into()), 1.0, 1.0),
            StationRecord::new(None, 9.0, 9.0),
        ];
        let set = build_layers(&input, &colors, true);

        assert_eq!(set.layers.len(), 2);
        assert_eq!(set.layers[1].project_id, ProjectId::new("New"));
        assert_eq!(set.layers[1].color, Color::fallback());
        assert_eq!(set.legend.unwrap().entries[1].color, Color::fallback());
    }

    #[test]
    fn test_custom_builder_settings() {
        let builder = LayerBuilder {
            marker: MarkerStyle {
                radius: 6,
                stroke: false,
                fill_opacity: 1.0,
            },
            fallback_color: Color::new("black"),
            legend_title: "Monitoring projects".to_string(),
        };
        let records = records();
        let set = builder.build(&records, &ColorAssignment::default(), true);

        assert!(set.layers.iter().all(|l| l.color == Color::new("black")));
        assert_eq!(set.layers[0].style.radius, 6);
        assert_eq!(set.legend.unwrap().title, "Monitoring projects");
    }

    #[test]
    fn test_bounds_cover_all_layers() {
        let records = records();
        let colors = assign_colors(&ProjectCatalog::from_records(&records), &Palette::default());
        let set = build_layers(&records, &colors, false);
        assert_eq!(set.bounds(), Some(BoundingBox::new(1.0, 1.0, 3.0, 3.0)));
    }
}
