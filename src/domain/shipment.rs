// ==========================================
// Business Analytics - client shipments facet
// ==========================================
// Raw shipment/payment rows and the per-client summary.
// ==========================================

use chrono::NaiveDateTime;
use serde::Serialize;

/// Placeholder used when the client cell is blank.
pub const UNKNOWN_CLIENT: &str = "Unknown client";

/// One shipment row extracted from the workbook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentRow {
    /// Shipment date; `None` when the cell is missing or unparseable.
    pub shipped_at: Option<NaiveDateTime>,
    pub client: String,
    pub shipment_amount: f64,
    /// Shipment weight in tons.
    pub shipment_weight: f64,
    pub paid_at: Option<NaiveDateTime>,
    pub payment_amount: f64,
}

impl ShipmentRow {
    pub fn is_valid(&self) -> bool {
        !self.client.trim().is_empty()
            && self.shipment_amount >= 0.0
            && self.shipment_weight >= 0.0
            && self.payment_amount >= 0.0
    }
}

/// Aggregated shipment/payment figures for one client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSummary {
    pub client: String,
    pub total_shipment_amount: f64,
    pub total_shipment_weight: f64,
    pub total_payment_amount: f64,
    /// Payments as a percentage of shipments for this client.
    pub payment_percentage: f64,
    /// Client's share of the domain-wide shipment amount (%).
    pub shipment_share: f64,
    /// Client's share of the domain-wide payment amount (%).
    pub payment_share: f64,
}
