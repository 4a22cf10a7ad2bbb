// ==========================================
// Business Analytics - extraction layer
// ==========================================
// Workbook/CSV -> normalized cells -> typed facet rows.
// ==========================================

pub mod cell;
pub mod error;
pub mod header;
pub mod sheet;
pub mod workbook_extractor;

pub use cell::Cell;
pub use error::{ExtractError, ExtractResult};
pub use header::HeaderIndex;
pub use sheet::SheetTable;
pub use workbook_extractor::WorkbookExtractor;

pub use crate::domain::dataset::ExtractedRows;
