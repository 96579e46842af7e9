//! Distinct projects in first-seen order.

use indexmap::IndexSet;
use serde::Serialize;
use station_common::{ProjectId, StationRecord};

/// Ordered set of project identifiers found in a record set.
///
/// Order is the order of first appearance in the records. Color and legend
/// stability depend on it, so it is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    ids: IndexSet<ProjectId>,
}

impl ProjectCatalog {
    /// Collect the distinct projects of `records`, skipping records without one.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a StationRecord>,
    {
        let ids = records
            .into_iter()
            .filter_map(|record| record.project.clone())
            .collect();
        Self { ids }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectId> {
        self.ids.iter()
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.ids.contains(id)
    }

    /// Zero-based catalog position of `id`.
    pub fn position(&self, id: &ProjectId) -> Option<usize> {
        self.ids.get_index_of(id)
    }

    pub fn get(&self, index: usize) -> Option<&ProjectId> {
        self.ids.get_index(index)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn to_vec(&self) -> Vec<ProjectId> {
        self.ids.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a ProjectCatalog {
    type Item = &'a ProjectId;
    type IntoIter = indexmap::set::Iter<'a, ProjectId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(project: Option<&str>) -> StationRecord {
        StationRecord::new(project.map(ProjectId::from), 0.0, 0.0)
    }

    #[test]
    fn test_first_seen_order_without_duplicates() {
        let records = vec![
            record(Some("B")),
            record(Some("A")),
            record(None),
            record(Some("B")),
            record(Some("C")),
            record(Some("A")),
        ];
        let catalog = ProjectCatalog::from_records(&records);
        assert_eq!(
            catalog.to_vec(),
            vec![ProjectId::new("B"), ProjectId::new("A"), ProjectId::new("C")]
        );
        assert_eq!(catalog.position(&ProjectId::new("C")), Some(2));
        assert_eq!(catalog.get(1), Some(&ProjectId::new("A")));
    }

    #[test]
    fn test_idempotent() {
        let records = vec![record(Some("X")), record(Some("Y")), record(Some("X"))];
        assert_eq!(
            ProjectCatalog::from_records(&records),
            ProjectCatalog::from_records(&records)
        );
    }

    #[test]
    fn test_empty_records() {
        let catalog = ProjectCatalog::from_records(&Vec::<StationRecord>::new());
        assert!(catalog.is_empty());
        assert_eq!(serde_json::to_string(&catalog).unwrap(), "[]");
    }
}
