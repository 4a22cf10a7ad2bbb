// ==========================================
// Business Analytics - configuration layer
// ==========================================
// Column mapping (named headers, JSON-overridable) and the explicit
// date-filter parameter passed by the caller.
// ==========================================

pub mod date_filter;
pub mod workbook_mapping;

pub use date_filter::DateFilter;
pub use workbook_mapping::{
    ContractorColumns, QualityColumns, ShipmentColumns, SupplierColumns, TransportColumns,
    WorkbookMapping,
};

use std::path::PathBuf;

/// Default location of the user's mapping override file.
pub fn default_mapping_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("business-analytics").join("mapping.json"))
}
