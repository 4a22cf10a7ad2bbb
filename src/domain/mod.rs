// ==========================================
// Business Analytics - domain layer
// ==========================================
// One raw-row type and one summary type per business facet.
// Rows are created once per load and never mutated; summaries are
// derived once per aggregation run.
// ==========================================

pub mod contractor;
pub mod dataset;
pub mod format;
pub mod quality;
pub mod shipment;
pub mod supplier;
pub mod transport;

pub use contractor::{ContractorRow, ContractorSummary, TransportCost};
pub use dataset::{AnalysisDataset, DomainReport, ExtractedRows};
pub use quality::{QualityControlRow, QualityControlSummary};
pub use shipment::{ClientSummary, ShipmentRow};
pub use supplier::{SupplierRow, SupplierSummary};
pub use transport::{TransportRow, TransportSummary};
