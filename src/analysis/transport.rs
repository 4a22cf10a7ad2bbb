// ==========================================
// Business Analytics - transport service analysis
// ==========================================
// Group hauls by transport company. The vehicle measure is a count of
// distinct vehicle identifiers, and vehicle shares divide by the
// distinct-count denominator across all filtered rows, not by row
// count. Ranked by total cost.
// ==========================================

use std::collections::HashSet;

use crate::analysis::grouping::{group_by_key, share, sort_descending_by};
use crate::config::DateFilter;
use crate::domain::transport::{TransportRow, TransportSummary};

pub fn analyze_transport(rows: &[TransportRow], filter: DateFilter) -> Vec<TransportSummary> {
    let filtered: Vec<&TransportRow> = rows
        .iter()
        .filter(|r| r.is_valid() && filter.accepts(r.carried_at))
        .collect();

    tracing::debug!(
        input = rows.len(),
        filtered = filtered.len(),
        "transport analysis"
    );

    if filtered.is_empty() {
        return Vec::new();
    }

    let total_vehicles = distinct_vehicles(&filtered);
    let total_cost: f64 = filtered.iter().map(|r| r.cost).sum();

    let groups = group_by_key(&filtered, |r| &r.company);
    tracing::debug!(
        companies = groups.len(),
        total_vehicles,
        "transport companies grouped"
    );

    let mut summaries: Vec<TransportSummary> = groups
        .into_iter()
        .map(|(company, group)| {
            let vehicle_count = distinct_vehicles(&group);
            let cost: f64 = group.iter().map(|r| r.cost).sum();
            let weight: f64 = group.iter().map(|r| r.weight).sum();

            TransportSummary {
                company,
                vehicle_count,
                vehicle_share: share(vehicle_count as f64, total_vehicles as f64),
                total_cost: cost,
                cost_share: share(cost, total_cost),
                total_weight: weight,
            }
        })
        .collect();

    sort_descending_by(&mut summaries, |s| s.total_cost);
    summaries
}

fn distinct_vehicles(rows: &[&TransportRow]) -> usize {
    rows.iter()
        .map(|r| r.vehicle.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(company: &str, cost: f64, weight: f64, vehicle: &str) -> TransportRow {
        TransportRow {
            carried_at: None,
            company: company.to_string(),
            cost,
            weight,
            vehicle: vehicle.to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(analyze_transport(&[], DateFilter::Disabled).is_empty());
    }

    #[test]
    fn test_distinct_vehicle_counting() {
        // FastHaul runs vehicle A1 twice: counts once.
        let rows = vec![
            row("FastHaul", 100.0, 2.0, "A1"),
            row("FastHaul", 50.0, 1.0, "A1"),
            row("FastHaul", 70.0, 1.5, "A2"),
            row("SlowCargo", 80.0, 3.0, "B1"),
        ];

        let summaries = analyze_transport(&rows, DateFilter::Disabled);
        assert_eq!(summaries.len(), 2);

        let fasthaul = &summaries[0];
        assert_eq!(fasthaul.company, "FastHaul");
        assert_eq!(fasthaul.vehicle_count, 2);
        assert_eq!(fasthaul.total_cost, 220.0);

        let slowcargo = &summaries[1];
        assert_eq!(slowcargo.vehicle_count, 1);

        // Shares divide by 3 distinct vehicles total, not 4 rows.
        assert!((fasthaul.vehicle_share - 2.0 / 3.0 * 100.0).abs() < 1e-9);
        assert!((slowcargo.vehicle_share - 1.0 / 3.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_vehicle_across_companies_counts_per_group() {
        // Distinctness is evaluated within each group, and once in the
        // domain denominator.
        let rows = vec![
            row("FastHaul", 10.0, 1.0, "SHARED"),
            row("SlowCargo", 20.0, 1.0, "SHARED"),
        ];
        let summaries = analyze_transport(&rows, DateFilter::Disabled);

        assert_eq!(summaries[0].vehicle_count, 1);
        assert_eq!(summaries[1].vehicle_count, 1);
        // Domain denominator is 1 distinct identifier.
        assert_eq!(summaries[0].vehicle_share, 100.0);
    }

    #[test]
    fn test_ranked_by_cost() {
        let rows = vec![
            row("Cheap", 10.0, 1.0, "C1"),
            row("Expensive", 500.0, 1.0, "E1"),
        ];
        let summaries = analyze_transport(&rows, DateFilter::Disabled);
        assert_eq!(summaries[0].company, "Expensive");
    }

    #[test]
    fn test_cost_shares_sum_to_hundred() {
        let rows = vec![
            row("A", 30.0, 1.0, "V1"),
            row("B", 70.0, 1.0, "V2"),
        ];
        let summaries = analyze_transport(&rows, DateFilter::Disabled);
        let total: f64 = summaries.iter().map(|s| s.cost_share).sum();
        assert!((total - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_cost_total_zero_shares() {
        let rows = vec![row("A", 0.0, 1.0, "V1"), row("B", 0.0, 2.0, "V2")];
        let summaries = analyze_transport(&rows, DateFilter::Disabled);
        for s in &summaries {
            assert_eq!(s.cost_share, 0.0);
        }
    }
}
