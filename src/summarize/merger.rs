//! Order-preserving, duplicate-free merging of per-chunk records

use std::collections::HashSet;

use crate::summarize::models::{ActionItem, MergedReport, SummaryRecord};

/// Merge ordered per-chunk records into one report.
///
/// The overview concatenates record summaries in order; key points and
/// action items are deduplicated first-seen-wins. Membership checks use hash
/// sets but output order comes only from input iteration order, so the merge
/// is deterministic and stable under re-application.
pub fn merge(records: &[SummaryRecord]) -> MergedReport {
    let overview = records
        .iter()
        .map(|r| r.summary.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let mut key_points = Vec::new();
    let mut seen_points: HashSet<&str> = HashSet::new();
    for record in records {
        for point in &record.key_points {
            if seen_points.insert(point.as_str()) {
                key_points.push(point.clone());
            }
        }
    }

    let mut action_items = Vec::new();
    let mut seen_items: HashSet<(Option<&str>, Option<&str>)> = HashSet::new();
    for record in records {
        for item in &record.action_items {
            let key = (item.assignee.as_deref(), item.task.as_deref());
            if seen_items.insert(key) {
                action_items.push(item.clone());
            }
        }
    }

    MergedReport {
        overview,
        key_points,
        action_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(assignee: Option<&str>, task: Option<&str>) -> ActionItem {
        ActionItem {
            assignee: assignee.map(str::to_string),
            task: task.map(str::to_string),
        }
    }

    fn record(summary: &str, key_points: &[&str], action_items: Vec<ActionItem>) -> SummaryRecord {
        SummaryRecord {
            summary: summary.to_string(),
            key_points: key_points.iter().map(|s| s.to_string()).collect(),
            action_items,
        }
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let merged = merge(&[]);
        assert_eq!(merged, MergedReport::default());
    }

    #[test]
    fn overview_joins_summaries_with_single_spaces() {
        let records = vec![
            record("A", &[], Vec::new()),
            record("B", &[], Vec::new()),
            record("C", &[], Vec::new()),
        ];
        assert_eq!(merge(&records).overview, "A B C");
    }

    #[test]
    fn duplicate_points_and_items_are_dropped_first_seen_wins() {
        let records = vec![
            record("A", &["x"], vec![item(Some("Bob"), Some("T1"))]),
            record("B", &["x", "y"], vec![item(Some("Bob"), Some("T1"))]),
        ];

        let merged = merge(&records);
        assert_eq!(merged.overview, "A B");
        assert_eq!(merged.key_points, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(merged.action_items, vec![item(Some("Bob"), Some("T1"))]);
    }

    #[test]
    fn dedup_is_case_sensitive_and_untrimmed() {
        let records = vec![record("", &["point", "Point", "point "], Vec::new())];
        let merged = merge(&records);
        assert_eq!(
            merged.key_points,
            vec!["point".to_string(), "Point".to_string(), "point ".to_string()]
        );
    }

    #[test]
    fn action_item_identity_distinguishes_missing_assignee() {
        let records = vec![record(
            "",
            &[],
            vec![
                item(None, Some("T1")),
                item(Some("Bob"), Some("T1")),
                item(None, Some("T1")),
            ],
        )];

        let merged = merge(&records);
        assert_eq!(
            merged.action_items,
            vec![item(None, Some("T1")), item(Some("Bob"), Some("T1"))]
        );
    }

    #[test]
    fn merge_is_idempotent_on_its_own_output() {
        let records = vec![
            record("A", &["x", "y"], vec![item(Some("Bob"), Some("T1"))]),
            record("B", &["y", "z"], vec![item(None, Some("T2"))]),
        ];
        let merged = merge(&records);

        let as_single_record = vec![SummaryRecord {
            summary: merged.overview.clone(),
            key_points: merged.key_points.clone(),
            action_items: merged.action_items.clone(),
        }];
        let remerged = merge(&as_single_record);

        assert_eq!(remerged.overview, merged.overview);
        assert_eq!(remerged.key_points, merged.key_points);
        assert_eq!(remerged.action_items, merged.action_items);
    }

    #[test]
    fn merge_order_is_deterministic_across_runs() {
        let records: Vec<SummaryRecord> = (0..50)
            .map(|i| {
                let p1 = format!("p{}", i % 7);
                let p2 = format!("p{}", i % 11);
                let assignee = format!("a{}", i % 5);
                record(
                    &format!("s{i}"),
                    &[p1.as_str(), p2.as_str()],
                    vec![item(Some(assignee.as_str()), Some("task"))],
                )
            })
            .collect();

        let first = merge(&records);
        let second = merge(&records);
        assert_eq!(first, second);
    }
}
