// ==========================================
// Business Analytics - per-facet row extraction
// ==========================================
// One pass per facet over the data rows: coerce mapped cells, skip
// fully-blank rows, substitute "Unknown <entity>" placeholders, keep
// only rows that pass the facet's validity predicate. Coercion is
// total, so no single row can abort a pass.
// ==========================================

use std::path::Path;

use crate::config::WorkbookMapping;
use crate::domain::contractor::{ContractorRow, UNKNOWN_CONTRACTOR};
use crate::domain::dataset::ExtractedRows;
use crate::domain::quality::{QualityControlRow, UNKNOWN_EMPLOYEE};
use crate::domain::shipment::{ShipmentRow, UNKNOWN_CLIENT};
use crate::domain::supplier::{SupplierRow, UNKNOWN_SUPPLIER};
use crate::domain::transport::{TransportRow, UNKNOWN_COMPANY, UNKNOWN_VEHICLE};
use crate::extractor::error::ExtractResult;
use crate::extractor::header::{HeaderIndex, ResolvedColumns};
use crate::extractor::sheet::SheetTable;

/// Extracts the five facet row lists from one workbook sheet.
pub struct WorkbookExtractor {
    mapping: WorkbookMapping,
}

impl WorkbookExtractor {
    pub fn new(mapping: WorkbookMapping) -> Self {
        Self { mapping }
    }

    pub fn with_defaults() -> Self {
        Self::new(WorkbookMapping::default())
    }

    pub fn mapping(&self) -> &WorkbookMapping {
        &self.mapping
    }

    /// Open the file and extract all five facets in sheet order.
    pub fn extract(&self, path: &Path) -> ExtractResult<ExtractedRows> {
        let table = SheetTable::open(path)?;
        self.extract_from_table(&table)
    }

    /// Extract from an already-loaded sheet. Header resolution happens
    /// once, before any row is read.
    pub fn extract_from_table(&self, table: &SheetTable) -> ExtractResult<ExtractedRows> {
        let headers = HeaderIndex::from_row(table.row(self.mapping.header_row), self.mapping.header_row);
        let columns = ResolvedColumns::resolve(&self.mapping, &headers)?;

        let rows = ExtractedRows {
            shipments: self.extract_shipments(table, &columns),
            transport: self.extract_transport(table, &columns),
            contractors: self.extract_contractors(table, &columns),
            suppliers: self.extract_suppliers(table, &columns),
            quality: self.extract_quality(table, &columns),
        };

        tracing::info!(
            shipments = rows.shipments.len(),
            transport = rows.transport.len(),
            contractors = rows.contractors.len(),
            suppliers = rows.suppliers.len(),
            quality = rows.quality.len(),
            "extraction finished"
        );

        Ok(rows)
    }

    fn data_rows(&self, table: &SheetTable) -> std::ops::Range<usize> {
        self.mapping.data_start_row..table.row_count()
    }

    fn extract_shipments(&self, table: &SheetTable, columns: &ResolvedColumns) -> Vec<ShipmentRow> {
        let cols = columns.shipments;
        let mut rows = Vec::new();

        for i in self.data_rows(table) {
            let client = table.cell(i, cols.client).as_text();
            let amount = table.cell(i, cols.amount).as_number();
            let weight = table.cell(i, cols.weight).as_number();

            if client.is_empty() && amount == 0.0 && weight == 0.0 {
                continue;
            }

            let row = ShipmentRow {
                shipped_at: table.cell(i, cols.shipped_at).as_datetime(),
                client: if client.is_empty() {
                    UNKNOWN_CLIENT.to_string()
                } else {
                    client
                },
                shipment_amount: amount,
                shipment_weight: weight,
                paid_at: cols
                    .paid_at
                    .and_then(|col| table.cell(i, col).as_datetime()),
                payment_amount: table.cell(i, cols.payment_amount).as_number(),
            };

            if row.is_valid() {
                rows.push(row);
            } else {
                tracing::debug!(row = i + 1, "shipment row dropped by validity check");
            }
        }

        rows
    }

    fn extract_transport(&self, table: &SheetTable, columns: &ResolvedColumns) -> Vec<TransportRow> {
        let cols = columns.transport;
        let mut rows = Vec::new();

        for i in self.data_rows(table) {
            let company = table.cell(i, cols.company).as_text();
            let cost = table.cell(i, cols.cost).as_number();
            let weight = table.cell(i, cols.weight).as_number();

            if company.is_empty() && cost == 0.0 && weight == 0.0 {
                continue;
            }

            let vehicle = table.cell(i, cols.vehicle).as_text();
            let row = TransportRow {
                carried_at: table.cell(i, cols.carried_at).as_datetime(),
                company: if company.is_empty() {
                    UNKNOWN_COMPANY.to_string()
                } else {
                    company
                },
                cost,
                weight,
                vehicle: if vehicle.is_empty() {
                    UNKNOWN_VEHICLE.to_string()
                } else {
                    vehicle
                },
            };

            if row.is_valid() {
                rows.push(row);
            } else {
                tracing::debug!(row = i + 1, "transport row dropped by validity check");
            }
        }

        rows
    }

    fn extract_contractors(
        &self,
        table: &SheetTable,
        columns: &ResolvedColumns,
    ) -> Vec<ContractorRow> {
        let cols = columns.contractors;
        let mut rows = Vec::new();

        for i in self.data_rows(table) {
            let contractor = table.cell(i, cols.contractor).as_text();
            let weight = table.cell(i, cols.weight).as_number();
            let revenue = table.cell(i, cols.revenue).as_number();

            if contractor.is_empty() && weight == 0.0 && revenue == 0.0 {
                continue;
            }

            let row = ContractorRow {
                worked_at: table.cell(i, cols.worked_at).as_datetime(),
                contractor: if contractor.is_empty() {
                    UNKNOWN_CONTRACTOR.to_string()
                } else {
                    contractor
                },
                weight,
                revenue,
                materials_cost: table.cell(i, cols.materials_cost).as_number(),
                contractor_cost: table.cell(i, cols.contractor_cost).as_number(),
            };

            if row.is_valid() {
                rows.push(row);
            } else {
                tracing::debug!(row = i + 1, "contractor row dropped by validity check");
            }
        }

        rows
    }

    fn extract_suppliers(&self, table: &SheetTable, columns: &ResolvedColumns) -> Vec<SupplierRow> {
        let cols = columns.suppliers;
        let mut rows = Vec::new();

        for i in self.data_rows(table) {
            let supplier = table.cell(i, cols.supplier).as_text();
            let cost = table.cell(i, cols.cost).as_number();

            if supplier.is_empty() && cost == 0.0 {
                continue;
            }

            let row = SupplierRow {
                delivered_at: table.cell(i, cols.delivered_at).as_datetime(),
                supplier: if supplier.is_empty() {
                    UNKNOWN_SUPPLIER.to_string()
                } else {
                    supplier
                },
                material_cost: cost,
                material_weight: cols
                    .weight
                    .map(|col| table.cell(i, col).as_number())
                    .unwrap_or(0.0),
            };

            if row.is_valid() {
                rows.push(row);
            } else {
                tracing::debug!(row = i + 1, "supplier row dropped by validity check");
            }
        }

        rows
    }

    fn extract_quality(&self, table: &SheetTable, columns: &ResolvedColumns) -> Vec<QualityControlRow> {
        let cols = columns.quality;
        let mut rows = Vec::new();

        for i in self.data_rows(table) {
            let employee = table.cell(i, cols.employee).as_text();
            let weight = table.cell(i, cols.weight).as_number();
            let value = table.cell(i, cols.value).as_number();

            if employee.is_empty() && weight == 0.0 && value == 0.0 {
                continue;
            }

            let row = QualityControlRow {
                checked_at: table.cell(i, cols.checked_at).as_datetime(),
                employee: if employee.is_empty() {
                    UNKNOWN_EMPLOYEE.to_string()
                } else {
                    employee
                },
                weight,
                value,
            };

            if row.is_valid() {
                rows.push(row);
            } else {
                tracing::debug!(row = i + 1, "quality row dropped by validity check");
            }
        }

        rows
    }
}
