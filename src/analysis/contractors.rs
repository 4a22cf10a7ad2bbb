// ==========================================
// Business Analytics - contractor profitability analysis
// ==========================================
// Group by contractor, sum weight/revenue/costs, derive profit and
// margins. Transport cost has no data source yet and stays an explicit
// NotYetAvailable placeholder, so profit is knowingly overstated.
// Ranked by profit.
// ==========================================

use crate::analysis::grouping::{group_by_key, ratio, share, sort_descending_by};
use crate::config::DateFilter;
use crate::domain::contractor::{ContractorRow, ContractorSummary, TransportCost};

pub fn analyze_contractors(rows: &[ContractorRow], filter: DateFilter) -> Vec<ContractorSummary> {
    let filtered: Vec<&ContractorRow> = rows
        .iter()
        .filter(|r| r.is_valid() && filter.accepts(r.worked_at))
        .collect();

    tracing::debug!(
        input = rows.len(),
        filtered = filtered.len(),
        "contractor analysis"
    );

    if filtered.is_empty() {
        return Vec::new();
    }

    // Domain-wide profit for the share denominator, before per-group
    // iteration. Equals the sum of per-group profits because transport
    // cost contributes nothing yet.
    let total_profit: f64 = filtered
        .iter()
        .map(|r| r.revenue - r.materials_cost - r.contractor_cost)
        .sum();

    let groups = group_by_key(&filtered, |r| &r.contractor);
    tracing::debug!(
        contractors = groups.len(),
        total_profit,
        "contractors grouped"
    );

    let mut summaries: Vec<ContractorSummary> = groups
        .into_iter()
        .map(|(contractor, group)| {
            let weight: f64 = group.iter().map(|r| r.weight).sum();
            let revenue: f64 = group.iter().map(|r| r.revenue).sum();
            let materials_cost: f64 = group.iter().map(|r| r.materials_cost).sum();
            let contractor_cost: f64 = group.iter().map(|r| r.contractor_cost).sum();

            let transport_cost = TransportCost::NotYetAvailable;
            let profit = revenue - materials_cost - contractor_cost - transport_cost.amount();

            ContractorSummary {
                contractor,
                total_weight: weight,
                total_revenue: revenue,
                total_materials_cost: materials_cost,
                total_contractor_cost: contractor_cost,
                transport_cost,
                profit,
                margin_per_ton: ratio(profit, weight),
                margin_percentage: share(profit, revenue),
                profit_share: share(profit, total_profit),
            }
        })
        .collect();

    sort_descending_by(&mut summaries, |s| s.profit);
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(contractor: &str, weight: f64, revenue: f64, materials: f64, pay: f64) -> ContractorRow {
        ContractorRow {
            worked_at: None,
            contractor: contractor.to_string(),
            weight,
            revenue,
            materials_cost: materials,
            contractor_cost: pay,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(analyze_contractors(&[], DateFilter::Disabled).is_empty());
    }

    #[test]
    fn test_profit_and_margins() {
        let rows = vec![
            row("BuildCo", 10.0, 1000.0, 200.0, 300.0),
            row("BuildCo", 10.0, 500.0, 100.0, 100.0),
        ];
        let summaries = analyze_contractors(&rows, DateFilter::Disabled);
        assert_eq!(summaries.len(), 1);

        let s = &summaries[0];
        assert_eq!(s.total_weight, 20.0);
        assert_eq!(s.total_revenue, 1500.0);
        assert_eq!(s.total_materials_cost, 300.0);
        assert_eq!(s.total_contractor_cost, 400.0);
        // 1500 - 300 - 400 - 0 (transport placeholder)
        assert_eq!(s.profit, 800.0);
        assert_eq!(s.margin_per_ton, 40.0);
        assert!((s.margin_percentage - 800.0 / 1500.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_transport_cost_stays_placeholder() {
        let rows = vec![row("BuildCo", 1.0, 100.0, 10.0, 10.0)];
        let summaries = analyze_contractors(&rows, DateFilter::Disabled);
        assert_eq!(summaries[0].transport_cost, TransportCost::NotYetAvailable);
        assert!(!summaries[0].transport_cost.is_available());
    }

    #[test]
    fn test_profit_shares_sum_to_hundred() {
        let rows = vec![
            row("A", 1.0, 400.0, 100.0, 100.0), // profit 200
            row("B", 1.0, 900.0, 50.0, 50.0),   // profit 800
        ];
        let summaries = analyze_contractors(&rows, DateFilter::Disabled);

        let total: f64 = summaries.iter().map(|s| s.profit_share).sum();
        assert!((total - 100.0).abs() < 1e-6);
        assert_eq!(summaries[0].contractor, "B"); // ranked by profit
        assert_eq!(summaries[0].profit_share, 80.0);
    }

    #[test]
    fn test_zero_weight_and_revenue_guards() {
        let rows = vec![row("ZeroCo", 0.0, 0.0, 0.0, 5.0)];
        let summaries = analyze_contractors(&rows, DateFilter::Disabled);

        let s = &summaries[0];
        assert_eq!(s.profit, -5.0);
        assert_eq!(s.margin_per_ton, 0.0);
        assert_eq!(s.margin_percentage, 0.0);
        // Negative domain profit: share denominator guarded to 0.0.
        assert_eq!(s.profit_share, 0.0);
    }

    #[test]
    fn test_ranked_by_profit_descending() {
        let rows = vec![
            row("Low", 1.0, 100.0, 50.0, 40.0),   // profit 10
            row("High", 1.0, 100.0, 10.0, 10.0),  // profit 80
            row("Mid", 1.0, 100.0, 30.0, 20.0),   // profit 50
        ];
        let summaries = analyze_contractors(&rows, DateFilter::Disabled);

        let names: Vec<&str> = summaries.iter().map(|s| s.contractor.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }
}
