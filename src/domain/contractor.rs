// ==========================================
// Business Analytics - contractor profitability facet
// ==========================================
// Raw contractor rows and the per-contractor summary with profit,
// margin and profit-share metrics.
// ==========================================

use chrono::NaiveDateTime;
use serde::Serialize;

pub const UNKNOWN_CONTRACTOR: &str = "Unknown contractor";

/// One contractor row extracted from the workbook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractorRow {
    pub worked_at: Option<NaiveDateTime>,
    pub contractor: String,
    /// Produced weight in tons.
    pub weight: f64,
    pub revenue: f64,
    pub materials_cost: f64,
    /// Payment to the contractor.
    pub contractor_cost: f64,
}

impl ContractorRow {
    pub fn is_valid(&self) -> bool {
        !self.contractor.trim().is_empty()
            && self.weight >= 0.0
            && self.revenue >= 0.0
            && self.materials_cost >= 0.0
            && self.contractor_cost >= 0.0
    }
}

/// Transport cost attributed to a contractor.
///
/// No data source feeds this yet, so summaries carry `NotYetAvailable`
/// rather than a zero that could be mistaken for a real figure. Profit
/// and margins are overstated until the wiring exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value")]
pub enum TransportCost {
    NotYetAvailable,
    Amount(f64),
}

impl TransportCost {
    /// Numeric value used in profit math; `NotYetAvailable` counts as 0.
    pub fn amount(&self) -> f64 {
        match self {
            TransportCost::NotYetAvailable => 0.0,
            TransportCost::Amount(v) => *v,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, TransportCost::Amount(_))
    }
}

/// Aggregated profitability figures for one contractor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractorSummary {
    pub contractor: String,
    pub total_weight: f64,
    pub total_revenue: f64,
    pub total_materials_cost: f64,
    pub total_contractor_cost: f64,
    pub transport_cost: TransportCost,
    /// revenue - materials - contractor payment - transport cost
    pub profit: f64,
    /// Profit per ton of produced weight.
    pub margin_per_ton: f64,
    /// Profit as a percentage of revenue.
    pub margin_percentage: f64,
    /// Share of the domain-wide profit (%).
    pub profit_share: f64,
}
