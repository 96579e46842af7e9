//! Deterministic project colors.

use indexmap::IndexMap;
use serde::Serialize;
use station_common::{Color, Palette, ProjectId};

use crate::catalog::ProjectCatalog;

/// Color per project, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorAssignment {
    colors: IndexMap<ProjectId, Color>,
}

impl ColorAssignment {
    pub fn get(&self, id: &ProjectId) -> Option<&Color> {
        self.colors.get(id)
    }

    /// Assigned color, or `fallback` for projects outside the catalog.
    pub fn color_or<'a>(&'a self, id: &ProjectId, fallback: &'a Color) -> &'a Color {
        self.colors.get(id).unwrap_or(fallback)
    }

    /// Catalog position of `id`, used to order layers.
    pub fn position(&self, id: &ProjectId) -> Option<usize> {
        self.colors.get_index_of(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProjectId, &Color)> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Assign `palette[i mod P]` to the project at catalog position `i`.
///
/// Pure in (catalog order, palette). Projects more than `P` positions apart
/// share a color.
pub fn assign_colors(catalog: &ProjectCatalog, palette: &Palette) -> ColorAssignment {
    let colors = catalog
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), palette.color_at(i).clone()))
        .collect();
    ColorAssignment { colors }
}
