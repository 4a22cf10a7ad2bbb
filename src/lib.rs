// ==========================================
// Business Analytics - core library
// ==========================================
// Pipeline: workbook -> typed rows -> ranked summaries -> display layer
// The GUI shell consumes `AnalysisDataset` as plain data.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - row and summary types
pub mod domain;

// Configuration layer - column mapping and date filter
pub mod config;

// Extraction layer - workbook/CSV to typed rows
pub mod extractor;

// Analysis layer - per-facet aggregation
pub mod analysis;

// API layer - the load operation
pub mod api;

// Application layer - current-dataset state
pub mod app;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

// Domain types
pub use domain::{
    AnalysisDataset, ClientSummary, ContractorRow, ContractorSummary, DomainReport,
    QualityControlRow, QualityControlSummary, ShipmentRow, SupplierRow, SupplierSummary,
    TransportCost, TransportRow, TransportSummary,
};

// Configuration
pub use config::{DateFilter, WorkbookMapping};

// Extraction
pub use extractor::{ExtractError, ExtractResult, ExtractedRows, WorkbookExtractor};

// API / app
pub use api::ReportApi;
pub use app::AppState;

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Business Analytics";
