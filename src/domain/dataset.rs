// ==========================================
// Business Analytics - result bundles
// ==========================================
// `ExtractedRows` carries the five raw-row lists between extraction
// and aggregation. `AnalysisDataset` is the immutable bundle handed to
// the display layer and replaced wholesale on each successful load.
// ==========================================

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::contractor::{ContractorRow, ContractorSummary};
use crate::domain::quality::{QualityControlRow, QualityControlSummary};
use crate::domain::shipment::{ClientSummary, ShipmentRow};
use crate::domain::supplier::{SupplierRow, SupplierSummary};
use crate::domain::transport::{TransportRow, TransportSummary};

/// Raw rows for all five facets, in sheet order, produced by one
/// extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedRows {
    pub shipments: Vec<ShipmentRow>,
    pub transport: Vec<TransportRow>,
    pub contractors: Vec<ContractorRow>,
    pub suppliers: Vec<SupplierRow>,
    pub quality: Vec<QualityControlRow>,
}

/// Raw rows plus ranked summaries for one facet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainReport<R, S> {
    pub rows: Vec<R>,
    pub summaries: Vec<S>,
}

impl<R, S> DomainReport<R, S> {
    pub fn new(rows: Vec<R>, summaries: Vec<S>) -> Self {
        Self { rows, summaries }
    }

    /// An empty summary list is the "no data" display state, not an error.
    pub fn has_data(&self) -> bool {
        !self.summaries.is_empty()
    }
}

/// The complete result of one file load.
///
/// Built only when every facet extracted and aggregated successfully;
/// the display layer never sees a partially-filled dataset.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDataset {
    pub load_id: Uuid,
    pub source_file: PathBuf,
    pub loaded_at: DateTime<Utc>,
    pub clients: DomainReport<ShipmentRow, ClientSummary>,
    pub transport: DomainReport<TransportRow, TransportSummary>,
    pub contractors: DomainReport<ContractorRow, ContractorSummary>,
    pub suppliers: DomainReport<SupplierRow, SupplierSummary>,
    pub quality: DomainReport<QualityControlRow, QualityControlSummary>,
}

impl AnalysisDataset {
    /// Total raw rows across all facets, for load diagnostics.
    pub fn total_rows(&self) -> usize {
        self.clients.rows.len()
            + self.transport.rows.len()
            + self.contractors.rows.len()
            + self.suppliers.rows.len()
            + self.quality.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_report_has_data() {
        let empty: DomainReport<ShipmentRow, ClientSummary> = DomainReport::new(vec![], vec![]);
        assert!(!empty.has_data());

        let with_summary: DomainReport<ShipmentRow, ClientSummary> = DomainReport::new(
            vec![],
            vec![ClientSummary {
                client: "Acme".to_string(),
                total_shipment_amount: 100.0,
                total_shipment_weight: 5.0,
                total_payment_amount: 100.0,
                payment_percentage: 100.0,
                shipment_share: 100.0,
                payment_share: 100.0,
            }],
        );
        assert!(with_summary.has_data());
    }
}
