// ==========================================
// Business Analytics - application state
// ==========================================
// The current dataset is a single immutable bundle behind a lock.
// A new load builds the replacement off to the side and swaps it in
// only on success, so readers never observe a partial load and a
// failed load leaves the previous dataset untouched.
// ==========================================

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::api::ReportApi;
use crate::config::{DateFilter, WorkbookMapping};
use crate::domain::dataset::AnalysisDataset;
use crate::extractor::ExtractResult;

pub struct AppState {
    api: ReportApi,
    current: RwLock<Option<Arc<AnalysisDataset>>>,
}

impl AppState {
    pub fn new(mapping: WorkbookMapping, filter: DateFilter) -> Self {
        Self {
            api: ReportApi::new(mapping, filter),
            current: RwLock::new(None),
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            api: ReportApi::with_defaults(),
            current: RwLock::new(None),
        }
    }

    /// Load a workbook and make it the current dataset. On failure the
    /// previously loaded dataset (if any) remains current.
    pub fn load_file(&self, path: &Path) -> ExtractResult<Arc<AnalysisDataset>> {
        let dataset = Arc::new(self.api.load(path)?);

        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::clone(&dataset));

        Ok(dataset)
    }

    /// The currently loaded dataset, if any.
    pub fn current(&self) -> Option<Arc<AnalysisDataset>> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    /// Drop the current dataset.
    pub fn clear(&self) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}
