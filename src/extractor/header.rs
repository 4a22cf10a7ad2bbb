// ==========================================
// Business Analytics - named-header resolution
// ==========================================
// The header row is resolved once per load; every facet looks its
// columns up by title. A missing title fails the whole load fast
// instead of silently defaulting downstream fields to zero.
// ==========================================

use std::collections::HashMap;

use crate::config::{
    ContractorColumns, QualityColumns, ShipmentColumns, SupplierColumns, TransportColumns,
    WorkbookMapping,
};
use crate::extractor::cell::Cell;
use crate::extractor::error::{ExtractError, ExtractResult};

/// Title -> column index for one header row. First occurrence wins
/// when a title repeats.
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
    header_row: usize,
}

impl HeaderIndex {
    pub fn from_row(cells: &[Cell], header_row: usize) -> Self {
        let mut columns = HashMap::new();
        for (idx, cell) in cells.iter().enumerate() {
            let title = cell.as_text();
            if !title.is_empty() {
                columns.entry(title).or_insert(idx);
            }
        }
        Self {
            columns,
            header_row,
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn lookup(&self, title: &str) -> Option<usize> {
        self.columns.get(title.trim()).copied()
    }

    /// Resolve a required column or fail the load.
    pub fn require(
        &self,
        domain: &'static str,
        field: &'static str,
        title: &str,
    ) -> ExtractResult<usize> {
        self.lookup(title).ok_or_else(|| ExtractError::MissingColumn {
            domain,
            field,
            header: title.to_string(),
            header_row: self.header_row,
        })
    }

    /// Resolve an optional column; a configured-but-absent title still
    /// fails, only an unconfigured one yields `None`.
    pub fn require_optional(
        &self,
        domain: &'static str,
        field: &'static str,
        title: Option<&str>,
    ) -> ExtractResult<Option<usize>> {
        match title {
            None => Ok(None),
            Some(t) => self.require(domain, field, t).map(Some),
        }
    }
}

// ==========================================
// Resolved per-facet column indices
// ==========================================

#[derive(Debug, Clone, Copy)]
pub struct ShipmentIndices {
    pub shipped_at: usize,
    pub client: usize,
    pub amount: usize,
    pub weight: usize,
    pub payment_amount: usize,
    pub paid_at: Option<usize>,
}

impl ShipmentIndices {
    pub fn resolve(
        columns: &ShipmentColumns,
        payment_amount_header: &str,
        headers: &HeaderIndex,
    ) -> ExtractResult<Self> {
        Ok(Self {
            shipped_at: headers.require("shipments", "shipped_at", &columns.shipped_at)?,
            client: headers.require("shipments", "client", &columns.client)?,
            amount: headers.require("shipments", "amount", &columns.amount)?,
            weight: headers.require("shipments", "weight", &columns.weight)?,
            payment_amount: headers.require("shipments", "payment_amount", payment_amount_header)?,
            paid_at: headers.require_optional("shipments", "paid_at", columns.paid_at.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TransportIndices {
    pub carried_at: usize,
    pub company: usize,
    pub cost: usize,
    pub weight: usize,
    pub vehicle: usize,
}

impl TransportIndices {
    pub fn resolve(columns: &TransportColumns, headers: &HeaderIndex) -> ExtractResult<Self> {
        Ok(Self {
            carried_at: headers.require("transport", "carried_at", &columns.carried_at)?,
            company: headers.require("transport", "company", &columns.company)?,
            cost: headers.require("transport", "cost", &columns.cost)?,
            weight: headers.require("transport", "weight", &columns.weight)?,
            vehicle: headers.require("transport", "vehicle", &columns.vehicle)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ContractorIndices {
    pub worked_at: usize,
    pub contractor: usize,
    pub weight: usize,
    pub revenue: usize,
    pub materials_cost: usize,
    pub contractor_cost: usize,
}

impl ContractorIndices {
    pub fn resolve(columns: &ContractorColumns, headers: &HeaderIndex) -> ExtractResult<Self> {
        Ok(Self {
            worked_at: headers.require("contractors", "worked_at", &columns.worked_at)?,
            contractor: headers.require("contractors", "contractor", &columns.contractor)?,
            weight: headers.require("contractors", "weight", &columns.weight)?,
            revenue: headers.require("contractors", "revenue", &columns.revenue)?,
            materials_cost: headers.require(
                "contractors",
                "materials_cost",
                &columns.materials_cost,
            )?,
            contractor_cost: headers.require(
                "contractors",
                "contractor_cost",
                &columns.contractor_cost,
            )?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SupplierIndices {
    pub delivered_at: usize,
    pub supplier: usize,
    pub cost: usize,
    pub weight: Option<usize>,
}

impl SupplierIndices {
    pub fn resolve(columns: &SupplierColumns, headers: &HeaderIndex) -> ExtractResult<Self> {
        Ok(Self {
            delivered_at: headers.require("suppliers", "delivered_at", &columns.delivered_at)?,
            supplier: headers.require("suppliers", "supplier", &columns.supplier)?,
            cost: headers.require("suppliers", "cost", &columns.cost)?,
            weight: headers.require_optional("suppliers", "weight", columns.weight.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QualityIndices {
    pub checked_at: usize,
    pub employee: usize,
    pub weight: usize,
    pub value: usize,
}

impl QualityIndices {
    pub fn resolve(columns: &QualityColumns, headers: &HeaderIndex) -> ExtractResult<Self> {
        Ok(Self {
            checked_at: headers.require("quality", "checked_at", &columns.checked_at)?,
            employee: headers.require("quality", "employee", &columns.employee)?,
            weight: headers.require("quality", "weight", &columns.weight)?,
            value: headers.require("quality", "value", &columns.value)?,
        })
    }
}

/// All five facets resolved against one header row.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColumns {
    pub shipments: ShipmentIndices,
    pub transport: TransportIndices,
    pub contractors: ContractorIndices,
    pub suppliers: SupplierIndices,
    pub quality: QualityIndices,
}

impl ResolvedColumns {
    pub fn resolve(mapping: &WorkbookMapping, headers: &HeaderIndex) -> ExtractResult<Self> {
        Ok(Self {
            shipments: ShipmentIndices::resolve(
                &mapping.shipments,
                mapping.payment_amount_header(),
                headers,
            )?,
            transport: TransportIndices::resolve(&mapping.transport, headers)?,
            contractors: ContractorIndices::resolve(&mapping.contractors, headers)?,
            suppliers: SupplierIndices::resolve(&mapping.suppliers, headers)?,
            quality: QualityIndices::resolve(&mapping.quality, headers)?,
        })
    }
}
