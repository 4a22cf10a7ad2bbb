// ==========================================
// Business Analytics - workbook column mapping
// ==========================================
// Named-header mapping resolved once per load. Replaces positional
// column indices: every required header must exist in the header row
// or the load fails with a MissingColumn error.
// Defaults match the de-facto spreadsheet template; a JSON file in the
// user config dir overrides them per installation.
// ==========================================

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Header titles for the client shipments facet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShipmentColumns {
    pub shipped_at: String,
    pub client: String,
    pub amount: String,
    pub weight: String,
    /// Payment amount column; `None` falls back to the shipment amount
    /// column (the template books payments against the same figure).
    pub payment_amount: Option<String>,
    pub paid_at: Option<String>,
}

impl Default for ShipmentColumns {
    fn default() -> Self {
        Self {
            shipped_at: "Дата отгрузки".to_string(),
            client: "Клиент".to_string(),
            amount: "Сумма отгрузки".to_string(),
            weight: "Вес отгрузки".to_string(),
            payment_amount: None,
            paid_at: None,
        }
    }
}

/// Header titles for the transport services facet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransportColumns {
    pub carried_at: String,
    pub company: String,
    pub cost: String,
    pub weight: String,
    pub vehicle: String,
}

impl Default for TransportColumns {
    fn default() -> Self {
        Self {
            carried_at: "Дата перевозки".to_string(),
            company: "Транспортная компания".to_string(),
            cost: "Стоимость перевозки".to_string(),
            weight: "Вес".to_string(),
            vehicle: "Транспортное средство".to_string(),
        }
    }
}

/// Header titles for the contractor profitability facet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContractorColumns {
    pub worked_at: String,
    pub contractor: String,
    pub weight: String,
    pub revenue: String,
    pub materials_cost: String,
    pub contractor_cost: String,
}

impl Default for ContractorColumns {
    fn default() -> Self {
        Self {
            worked_at: "Дата работ".to_string(),
            contractor: "Подрядчик".to_string(),
            weight: "Вес".to_string(),
            revenue: "Выручка".to_string(),
            materials_cost: "Стоимость материалов".to_string(),
            contractor_cost: "Оплата подрядчику".to_string(),
        }
    }
}

/// Header titles for the material suppliers facet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SupplierColumns {
    pub delivered_at: String,
    pub supplier: String,
    pub cost: String,
    /// Tonnage column; the current template has none, so `None` means
    /// every row gets weight 0.0.
    pub weight: Option<String>,
}

impl Default for SupplierColumns {
    fn default() -> Self {
        Self {
            delivered_at: "Дата поставки".to_string(),
            supplier: "Поставщик".to_string(),
            cost: "Стоимость материалов".to_string(),
            weight: None,
        }
    }
}

/// Header titles for the quality control facet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QualityColumns {
    pub checked_at: String,
    pub employee: String,
    pub weight: String,
    pub value: String,
}

impl Default for QualityColumns {
    fn default() -> Self {
        Self {
            checked_at: "Дата проверки".to_string(),
            employee: "Сотрудник ОТК".to_string(),
            weight: "Вес".to_string(),
            value: "Стоимость".to_string(),
        }
    }
}

/// Complete column mapping for one workbook template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkbookMapping {
    /// 0-based row holding the column titles (last of the reserved
    /// header/metadata rows).
    pub header_row: usize,
    /// 0-based first data row.
    pub data_start_row: usize,
    pub shipments: ShipmentColumns,
    pub transport: TransportColumns,
    pub contractors: ContractorColumns,
    pub suppliers: SupplierColumns,
    pub quality: QualityColumns,
}

impl Default for WorkbookMapping {
    fn default() -> Self {
        Self {
            header_row: 2,
            data_start_row: 3,
            shipments: ShipmentColumns::default(),
            transport: TransportColumns::default(),
            contractors: ContractorColumns::default(),
            suppliers: SupplierColumns::default(),
            quality: QualityColumns::default(),
        }
    }
}

impl WorkbookMapping {
    /// Read a mapping from a JSON file. Missing fields fall back to the
    /// template defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, serde_json::Error> {
        let content = fs::read_to_string(path).map_err(serde_json::Error::io)?;
        serde_json::from_str(&content)
    }

    /// Load the override file when present, otherwise the defaults.
    /// A broken override logs a warning and falls back; a bad mapping
    /// file must not brick the application.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::from_json_file(path) {
            Ok(mapping) => {
                tracing::info!("loaded column mapping override from {}", path.display());
                mapping
            }
            Err(e) => {
                tracing::warn!(
                    "failed to read mapping override {}: {}; using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Effective payment-amount header for the shipments facet.
    pub fn payment_amount_header(&self) -> &str {
        self.shipments
            .payment_amount
            .as_deref()
            .unwrap_or(&self.shipments.amount)
    }
}
