// ==========================================
// Business Analytics - material suppliers facet
// ==========================================

use chrono::NaiveDateTime;
use serde::Serialize;

pub const UNKNOWN_SUPPLIER: &str = "Unknown supplier";

/// One material delivery row extracted from the workbook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierRow {
    pub delivered_at: Option<NaiveDateTime>,
    pub supplier: String,
    pub material_cost: f64,
    /// Delivered tonnage; 0.0 when the template carries no weight column.
    pub material_weight: f64,
}

impl SupplierRow {
    pub fn is_valid(&self) -> bool {
        !self.supplier.trim().is_empty() && self.material_cost >= 0.0 && self.material_weight >= 0.0
    }
}

/// Aggregated figures for one supplier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierSummary {
    pub supplier: String,
    pub total_weight: f64,
    pub total_cost: f64,
    /// Share of the domain-wide delivered tonnage (%).
    pub quantity_share: f64,
    pub cost_share: f64,
    /// Average cost per delivered ton.
    pub avg_cost_per_ton: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        let row = SupplierRow {
            delivered_at: None,
            supplier: "SteelBase".to_string(),
            material_cost: 250.0,
            material_weight: 0.0,
        };
        assert!(row.is_valid());

        let negative = SupplierRow {
            material_cost: -250.0,
            ..row.clone()
        };
        assert!(!negative.is_valid());

        let blank = SupplierRow {
            supplier: "  ".to_string(),
            ..row
        };
        assert!(!blank.is_valid());
    }
}
