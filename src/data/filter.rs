use super::model::SourceRecord;

// ---------------------------------------------------------------------------
// Exclusion rules: which order lines never reach the report
// ---------------------------------------------------------------------------

/// Business rules that drop an order line from the report.
///
/// Matching is a case-sensitive substring test, so `"PreCancelled"` is as
/// cancelled as `"Cancelled"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionRule {
    /// Progress point mentions `Cancelled`.
    Cancelled,
    /// Canada resale sub-lines: ship location mentions `CANADA RESALE`, the
    /// sub-line id contains a `0` and the schedule id contains a `2`.
    CanadaResaleSubLine,
}

impl ExclusionRule {
    /// Evaluation order used by [`apply_exclusions`].
    pub const ALL: [ExclusionRule; 2] = [ExclusionRule::Cancelled, ExclusionRule::CanadaResaleSubLine];

    pub fn matches(self, record: &SourceRecord) -> bool {
        match self {
            ExclusionRule::Cancelled => record.progress_point.contains("Cancelled"),
            ExclusionRule::CanadaResaleSubLine => {
                record.ship_location.contains("CANADA RESALE")
                    && record.sub_line_item.contains('0')
                    && record.ship_schedule_id.contains('2')
            }
        }
    }
}

/// Remove every record matched by any rule, keeping the survivors in their
/// original relative order.
pub fn apply_exclusions(mut records: Vec<SourceRecord>) -> Vec<SourceRecord> {
    for rule in ExclusionRule::ALL {
        let before = records.len();
        records.retain(|rec| !rule.matches(rec));
        log::info!("{rule:?}: excluded {} of {before} records", before - records.len());
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::record;

    #[test]
    fn cancelled_matches_any_substring_position() {
        for progress in ["Cancelled", "Cancelled by Customer", "PreCancelled", "Cancelled-Partial"] {
            assert!(ExclusionRule::Cancelled.matches(&record(1, progress, "TORONTO", "1", "1")));
        }
        for progress in ["cancelled", "CANCELLED", "Shipped", "Cancel"] {
            assert!(!ExclusionRule::Cancelled.matches(&record(1, progress, "TORONTO", "1", "1")));
        }
    }

    #[test]
    fn canada_resale_needs_all_three_conditions() {
        let rule = ExclusionRule::CanadaResaleSubLine;
        assert!(rule.matches(&record(1, "Open", "CANADA RESALE", "10", "2-A")));
        assert!(rule.matches(&record(1, "Open", "XX CANADA RESALE WH", "0", "12")));

        assert!(!rule.matches(&record(1, "Open", "CANADA", "10", "2-A")));
        assert!(!rule.matches(&record(1, "Open", "canada resale", "10", "2-A")));
        assert!(!rule.matches(&record(1, "Open", "CANADA RESALE", "1", "2-A")));
        assert!(!rule.matches(&record(1, "Open", "CANADA RESALE", "10", "1-A")));
    }

    #[test]
    fn survivors_keep_their_relative_order() {
        let records = vec![
            record(1, "Open", "TORONTO", "1", "1"),
            record(2, "Cancelled", "TORONTO", "1", "1"),
            record(3, "Shipped", "MONTREAL", "1", "1"),
            record(4, "Open", "CANADA RESALE", "20", "2"),
            record(5, "Open", "CANADA RESALE", "1", "2"),
        ];
        let lines: Vec<u64> = apply_exclusions(records).iter().map(|r| r.line).collect();
        assert_eq!(lines, [1, 3, 5]);
    }

    #[test]
    fn rule_order_does_not_change_the_result() {
        let records = vec![
            record(1, "Cancelled", "CANADA RESALE", "10", "2"),
            record(2, "Open", "CANADA RESALE", "10", "2"),
            record(3, "Open", "VANCOUVER", "10", "2"),
        ];
        let mut reversed = records.clone();
        for rule in ExclusionRule::ALL.into_iter().rev() {
            reversed.retain(|rec| !rule.matches(rec));
        }
        assert_eq!(apply_exclusions(records), reversed);
    }
}
