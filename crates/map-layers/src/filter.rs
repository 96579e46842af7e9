//! Selection filter.

use station_common::StationRecord;

use crate::selection::Selection;

/// Records whose project is selected, in their original order.
///
/// An empty selection yields no records; records without a project never match.
pub fn filter_records<'a>(
    records: &'a [StationRecord],
    selection: &Selection,
) -> Vec<&'a StationRecord> {
    if selection.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| {
            record
                .project
                .as_ref()
                .is_some_and(|project| selection.contains(project))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use station_common::ProjectId;

    fn records() -> Vec<StationRecord> {
        vec![
            StationRecord::new(Some("P1".into()), 1.0, 1.0),
            StationRecord::new(Some("P2".into()), 3.0, 3.0),
            StationRecord::new(None, 4.0, 4.0),
            StationRecord::new(Some("P1".into()), 2.0, 2.0),
        ]
    }

    #[test]
    fn test_empty_selection_shows_nothing() {
        assert!(filter_records(&records(), &Selection::new()).is_empty());
    }

    #[test]
    fn test_keeps_order_of_matches() {
        let records = records();
        let selection: Selection = vec![ProjectId::new("P1")].into_iter().collect();
        let filtered = filter_records(&records, &selection);
        let lats: Vec<f64> = filtered.iter().map(|r| r.latitude).collect();
        assert_eq!(lats, vec![1.0, 2.0]);
    }

    #[test]
    fn test_unknown_project_matches_nothing() {
        let selection: Selection = vec![ProjectId::new("Ghost")].into_iter().collect();
        assert!(filter_records(&records(), &selection).is_empty());
    }
}
