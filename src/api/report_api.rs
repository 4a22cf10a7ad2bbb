// ==========================================
// Business Analytics - load operation
// ==========================================
// One file load: extract all five facets, then aggregate all five,
// sequentially and synchronously, producing one complete dataset.
// Partial results are never surfaced; the first failure aborts.
// ==========================================

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use crate::analysis::{
    analyze_clients, analyze_contractors, analyze_quality, analyze_suppliers, analyze_transport,
};
use crate::config::{DateFilter, WorkbookMapping};
use crate::domain::dataset::{AnalysisDataset, DomainReport};
use crate::extractor::{ExtractResult, WorkbookExtractor};

/// Entry point for file loads.
pub struct ReportApi {
    extractor: WorkbookExtractor,
    filter: DateFilter,
}

impl ReportApi {
    pub fn new(mapping: WorkbookMapping, filter: DateFilter) -> Self {
        Self {
            extractor: WorkbookExtractor::new(mapping),
            filter,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(WorkbookMapping::default(), DateFilter::Disabled)
    }

    pub fn filter(&self) -> DateFilter {
        self.filter
    }

    /// Load one workbook and produce the full analysis dataset.
    pub fn load(&self, path: &Path) -> ExtractResult<AnalysisDataset> {
        tracing::info!(file = %path.display(), filter = ?self.filter, "loading workbook");

        let rows = self.extractor.extract(path)?;

        let clients = analyze_clients(&rows.shipments, self.filter);
        let transport = analyze_transport(&rows.transport, self.filter);
        let contractors = analyze_contractors(&rows.contractors, self.filter);
        let suppliers = analyze_suppliers(&rows.suppliers, self.filter);
        let quality = analyze_quality(&rows.quality, self.filter);

        let dataset = AnalysisDataset {
            load_id: Uuid::new_v4(),
            source_file: path.to_path_buf(),
            loaded_at: Utc::now(),
            clients: DomainReport::new(rows.shipments, clients),
            transport: DomainReport::new(rows.transport, transport),
            contractors: DomainReport::new(rows.contractors, contractors),
            suppliers: DomainReport::new(rows.suppliers, suppliers),
            quality: DomainReport::new(rows.quality, quality),
        };

        tracing::info!(
            load_id = %dataset.load_id,
            total_rows = dataset.total_rows(),
            clients = dataset.clients.summaries.len(),
            transport = dataset.transport.summaries.len(),
            contractors = dataset.contractors.summaries.len(),
            suppliers = dataset.suppliers.summaries.len(),
            quality = dataset.quality.summaries.len(),
            "workbook loaded"
        );

        Ok(dataset)
    }
}

impl Default for ReportApi {
    fn default() -> Self {
        Self::with_defaults()
    }
}
