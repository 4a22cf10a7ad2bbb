// ==========================================
// Business Analytics - material supplier analysis
// ==========================================
// Group deliveries by supplier, sum cost/tonnage, derive quantity and
// cost shares plus average cost per ton. Ranked by total cost.
// ==========================================

use crate::analysis::grouping::{group_by_key, ratio, share, sort_descending_by};
use crate::config::DateFilter;
use crate::domain::supplier::{SupplierRow, SupplierSummary};

pub fn analyze_suppliers(rows: &[SupplierRow], filter: DateFilter) -> Vec<SupplierSummary> {
    let filtered: Vec<&SupplierRow> = rows
        .iter()
        .filter(|r| r.is_valid() && filter.accepts(r.delivered_at))
        .collect();

    tracing::debug!(
        input = rows.len(),
        filtered = filtered.len(),
        "supplier analysis"
    );

    if filtered.is_empty() {
        return Vec::new();
    }

    let total_weight: f64 = filtered.iter().map(|r| r.material_weight).sum();
    let total_cost: f64 = filtered.iter().map(|r| r.material_cost).sum();

    let groups = group_by_key(&filtered, |r| &r.supplier);
    tracing::debug!(suppliers = groups.len(), "suppliers grouped");

    let mut summaries: Vec<SupplierSummary> = groups
        .into_iter()
        .map(|(supplier, group)| {
            let weight: f64 = group.iter().map(|r| r.material_weight).sum();
            let cost: f64 = group.iter().map(|r| r.material_cost).sum();

            SupplierSummary {
                supplier,
                total_weight: weight,
                total_cost: cost,
                quantity_share: share(weight, total_weight),
                cost_share: share(cost, total_cost),
                avg_cost_per_ton: ratio(cost, weight),
            }
        })
        .collect();

    sort_descending_by(&mut summaries, |s| s.total_cost);
    summaries
}
