// ==========================================
// Business Analytics - client shipment analysis
// ==========================================
// Group shipments by client, sum amounts/weights/payments, compute
// payment percentage and domain shares, rank by shipment amount.
// ==========================================

use crate::analysis::grouping::{group_by_key, share, sort_descending_by};
use crate::config::DateFilter;
use crate::domain::shipment::{ClientSummary, ShipmentRow};

pub fn analyze_clients(rows: &[ShipmentRow], filter: DateFilter) -> Vec<ClientSummary> {
    let filtered: Vec<&ShipmentRow> = rows
        .iter()
        .filter(|r| r.is_valid() && filter.accepts(r.shipped_at))
        .collect();

    tracing::debug!(
        input = rows.len(),
        filtered = filtered.len(),
        "client analysis"
    );

    if filtered.is_empty() {
        return Vec::new();
    }

    // Domain totals, computed once before per-group iteration.
    let total_shipment_amount: f64 = filtered.iter().map(|r| r.shipment_amount).sum();
    let total_payment_amount: f64 = filtered.iter().map(|r| r.payment_amount).sum();

    let groups = group_by_key(&filtered, |r| &r.client);
    tracing::debug!(clients = groups.len(), "clients grouped");

    let mut summaries: Vec<ClientSummary> = groups
        .into_iter()
        .map(|(client, group)| {
            let shipment_amount: f64 = group.iter().map(|r| r.shipment_amount).sum();
            let shipment_weight: f64 = group.iter().map(|r| r.shipment_weight).sum();
            let payment_amount: f64 = group.iter().map(|r| r.payment_amount).sum();

            ClientSummary {
                client,
                total_shipment_amount: shipment_amount,
                total_shipment_weight: shipment_weight,
                total_payment_amount: payment_amount,
                payment_percentage: share(payment_amount, shipment_amount),
                shipment_share: share(shipment_amount, total_shipment_amount),
                payment_share: share(payment_amount, total_payment_amount),
            }
        })
        .collect();

    sort_descending_by(&mut summaries, |s| s.total_shipment_amount);
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(client: &str, amount: f64, weight: f64) -> ShipmentRow {
        ShipmentRow {
            shipped_at: None,
            client: client.to_string(),
            shipment_amount: amount,
            shipment_weight: weight,
            paid_at: None,
            payment_amount: amount,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(analyze_clients(&[], DateFilter::Disabled).is_empty());
    }

    #[test]
    fn test_aggregation_and_tie_order() {
        // Two equal-ranked clients: encounter order must decide.
        let rows = vec![
            row("Acme", 100.0, 5.0),
            row("Acme", 50.0, 2.0),
            row("Globex", 150.0, 10.0),
        ];

        let summaries = analyze_clients(&rows, DateFilter::Disabled);
        assert_eq!(summaries.len(), 2);

        assert_eq!(summaries[0].client, "Acme");
        assert_eq!(summaries[0].total_shipment_amount, 150.0);
        assert_eq!(summaries[0].total_shipment_weight, 7.0);
        assert_eq!(summaries[0].shipment_share, 50.0);

        assert_eq!(summaries[1].client, "Globex");
        assert_eq!(summaries[1].total_shipment_amount, 150.0);
        assert_eq!(summaries[1].total_shipment_weight, 10.0);
        assert_eq!(summaries[1].shipment_share, 50.0);
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let rows = vec![
            row("A", 30.0, 1.0),
            row("B", 50.0, 1.0),
            row("C", 20.0, 1.0),
        ];
        let summaries = analyze_clients(&rows, DateFilter::Disabled);

        let total_share: f64 = summaries.iter().map(|s| s.shipment_share).sum();
        assert!((total_share - 100.0).abs() < 1e-6);
        let total_payment_share: f64 = summaries.iter().map(|s| s.payment_share).sum();
        assert!((total_payment_share - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_total_gives_zero_shares() {
        let rows = vec![row("A", 0.0, 1.0), row("B", 0.0, 2.0)];
        let summaries = analyze_clients(&rows, DateFilter::Disabled);

        for s in &summaries {
            assert_eq!(s.shipment_share, 0.0);
            assert_eq!(s.payment_share, 0.0);
            assert_eq!(s.payment_percentage, 0.0);
        }
    }

    #[test]
    fn test_ranking_descending() {
        let rows = vec![row("Small", 10.0, 1.0), row("Big", 90.0, 1.0)];
        let summaries = analyze_clients(&rows, DateFilter::Disabled);

        assert_eq!(summaries[0].client, "Big");
        for pair in summaries.windows(2) {
            assert!(pair[0].total_shipment_amount >= pair[1].total_shipment_amount);
        }
    }

    #[test]
    fn test_date_filter_applies() {
        let in_range = ShipmentRow {
            shipped_at: chrono::NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0),
            ..row("Acme", 100.0, 5.0)
        };
        let out_of_range = ShipmentRow {
            shipped_at: chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0),
            ..row("Globex", 200.0, 5.0)
        };
        let undated = row("Initech", 300.0, 5.0);

        let filter = DateFilter::range(
            chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        );
        let summaries = analyze_clients(&[in_range, out_of_range, undated], filter);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].client, "Acme");
    }

    #[test]
    fn test_idempotent() {
        let rows = vec![
            row("Acme", 100.0, 5.0),
            row("Globex", 150.0, 10.0),
            row("Acme", 50.0, 2.0),
        ];
        let first = analyze_clients(&rows, DateFilter::Disabled);
        let second = analyze_clients(&rows, DateFilter::Disabled);
        assert_eq!(first, second);
    }
}
