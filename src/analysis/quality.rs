// ==========================================
// Business Analytics - quality control analysis
// ==========================================
// Group checks by QC employee, sum checked weight/value, derive shares
// and productivity. Ranked by checked weight. Also provides the
// per-day checked-weight breakdown used by the throughput chart.
// ==========================================

use chrono::NaiveDate;

use crate::analysis::grouping::{group_by_key, ratio, share, sort_descending_by};
use crate::config::DateFilter;
use crate::domain::quality::{QualityControlRow, QualityControlSummary};

pub fn analyze_quality(rows: &[QualityControlRow], filter: DateFilter) -> Vec<QualityControlSummary> {
    let filtered: Vec<&QualityControlRow> = rows
        .iter()
        .filter(|r| r.is_valid() && filter.accepts(r.checked_at))
        .collect();

    tracing::debug!(
        input = rows.len(),
        filtered = filtered.len(),
        "quality control analysis"
    );

    if filtered.is_empty() {
        return Vec::new();
    }

    let total_weight: f64 = filtered.iter().map(|r| r.weight).sum();
    let total_value: f64 = filtered.iter().map(|r| r.value).sum();

    let groups = group_by_key(&filtered, |r| &r.employee);
    tracing::debug!(employees = groups.len(), "QC employees grouped");

    let mut summaries: Vec<QualityControlSummary> = groups
        .into_iter()
        .map(|(employee, group)| {
            let weight: f64 = group.iter().map(|r| r.weight).sum();
            let value: f64 = group.iter().map(|r| r.value).sum();

            QualityControlSummary {
                employee,
                total_weight: weight,
                total_value: value,
                weight_share: share(weight, total_weight),
                value_share: share(value, total_value),
                productivity: ratio(value, weight),
            }
        })
        .collect();

    sort_descending_by(&mut summaries, |s| s.total_weight);
    summaries
}

/// Checked weight per calendar day, heaviest day first. Rows without a
/// check date are excluded.
pub fn daily_checked_weight(rows: &[QualityControlRow]) -> Vec<(NaiveDate, f64)> {
    let dated: Vec<&QualityControlRow> = rows
        .iter()
        .filter(|r| r.is_valid() && r.checked_at.is_some())
        .collect();

    let mut days: Vec<(NaiveDate, f64)> = Vec::new();
    for row in dated {
        // checked_at is Some by the filter above.
        let day = match row.checked_at {
            Some(dt) => dt.date(),
            None => continue,
        };
        match days.iter_mut().find(|(d, _)| *d == day) {
            Some((_, weight)) => *weight += row.weight,
            None => days.push((day, row.weight)),
        }
    }

    sort_descending_by(&mut days, |(_, weight)| *weight);
    days
}
