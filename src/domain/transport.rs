// ==========================================
// Business Analytics - transport services facet
// ==========================================
// Raw haul rows and the per-company summary. Vehicle counts are
// distinct-identifier counts, not row counts.
// ==========================================

use chrono::NaiveDateTime;
use serde::Serialize;

pub const UNKNOWN_COMPANY: &str = "Unknown transport company";
pub const UNKNOWN_VEHICLE: &str = "Unknown vehicle";

/// One transport service row extracted from the workbook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportRow {
    pub carried_at: Option<NaiveDateTime>,
    pub company: String,
    pub cost: f64,
    /// Carried weight in tons.
    pub weight: f64,
    /// Vehicle identifier (plate or internal code).
    pub vehicle: String,
}

impl TransportRow {
    pub fn is_valid(&self) -> bool {
        !self.company.trim().is_empty() && self.cost >= 0.0 && self.weight >= 0.0
    }
}

/// Aggregated figures for one transport company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportSummary {
    pub company: String,
    /// Number of distinct vehicles this company used.
    pub vehicle_count: usize,
    /// Share of the distinct-vehicle denominator across all companies (%).
    pub vehicle_share: f64,
    pub total_cost: f64,
    pub cost_share: f64,
    pub total_weight: f64,
}
