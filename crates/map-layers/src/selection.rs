//! The caller's set of visible projects.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use station_common::ProjectId;

use crate::catalog::ProjectCatalog;

/// Projects the user has chosen to show.
///
/// Members need not be in the catalog; unknown identifiers match nothing.
/// An empty selection shows nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: BTreeSet<ProjectId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection containing every catalog project.
    pub fn all(catalog: &ProjectCatalog) -> Self {
        catalog.iter().cloned().collect()
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.ids.contains(id)
    }

    /// Add a project. Returns whether it was newly added.
    pub fn add(&mut self, id: ProjectId) -> bool {
        self.ids.insert(id)
    }

    /// Remove a project. Returns whether it was present.
    pub fn remove(&mut self, id: &ProjectId) -> bool {
        self.ids.remove(id)
    }

    /// Flip membership of a project. Returns whether it is now selected.
    pub fn toggle(&mut self, id: ProjectId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn select_all(&mut self, catalog: &ProjectCatalog) {
        self.ids.extend(catalog.iter().cloned());
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replace the selection wholesale.
    pub fn set<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ProjectId>,
    {
        self.ids = ids.into_iter().collect();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ProjectId> for Selection {
    fn from_iter<I: IntoIterator<Item = ProjectId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
