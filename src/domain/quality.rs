// ==========================================
// Business Analytics - quality control facet
// ==========================================
// Throughput of QC employees: checked weight and checked value.
// ==========================================

use chrono::NaiveDateTime;
use serde::Serialize;

pub const UNKNOWN_EMPLOYEE: &str = "Unknown employee";

/// One quality-control check row extracted from the workbook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityControlRow {
    pub checked_at: Option<NaiveDateTime>,
    pub employee: String,
    /// Checked product weight in tons.
    pub weight: f64,
    /// Checked product value.
    pub value: f64,
}

impl QualityControlRow {
    pub fn is_valid(&self) -> bool {
        !self.employee.trim().is_empty() && self.weight >= 0.0 && self.value >= 0.0
    }
}

/// Aggregated throughput for one QC employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityControlSummary {
    pub employee: String,
    pub total_weight: f64,
    pub total_value: f64,
    pub weight_share: f64,
    pub value_share: f64,
    /// Checked value per ton of checked weight.
    pub productivity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        let row = QualityControlRow {
            checked_at: None,
            employee: "Ivanov I.I.".to_string(),
            weight: 4.0,
            value: 900.0,
        };
        assert!(row.is_valid());

        let blank = QualityControlRow {
            employee: "".to_string(),
            ..row.clone()
        };
        assert!(!blank.is_valid());

        let negative = QualityControlRow { weight: -4.0, ..row };
        assert!(!negative.is_valid());
    }
}
