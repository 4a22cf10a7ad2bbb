// ==========================================
// Business Analytics - application state integration tests
// ==========================================
// The current dataset swaps atomically: a successful load replaces it,
// a failed load leaves it untouched.
// ==========================================

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use business_analytics::config::{ShipmentColumns, SupplierColumns};
use business_analytics::{logging, AppState, DateFilter, WorkbookMapping};

const REPORT_CSV: &str = "\
title,,,,,,,,,,,,,,
,,,,,,,,,,,,,,
Date,Client,Amount,Weight,Company,Cost,Vehicle,Contractor,Revenue,Materials,ContractorPay,Supplier,MaterialCost,Employee,Value
15.01.2025,Acme,1000,10,FastHaul,200,AB123,BuildCo,5000,1500,500,SteelBase,300,Ivanov,900
";

fn test_mapping() -> WorkbookMapping {
    let mut mapping = WorkbookMapping::default();
    mapping.shipments = ShipmentColumns {
        shipped_at: "Date".to_string(),
        client: "Client".to_string(),
        amount: "Amount".to_string(),
        weight: "Weight".to_string(),
        payment_amount: None,
        paid_at: None,
    };
    mapping.transport.carried_at = "Date".to_string();
    mapping.transport.company = "Company".to_string();
    mapping.transport.cost = "Cost".to_string();
    mapping.transport.weight = "Weight".to_string();
    mapping.transport.vehicle = "Vehicle".to_string();
    mapping.contractors.worked_at = "Date".to_string();
    mapping.contractors.contractor = "Contractor".to_string();
    mapping.contractors.weight = "Weight".to_string();
    mapping.contractors.revenue = "Revenue".to_string();
    mapping.contractors.materials_cost = "Materials".to_string();
    mapping.contractors.contractor_cost = "ContractorPay".to_string();
    mapping.suppliers = SupplierColumns {
        delivered_at: "Date".to_string(),
        supplier: "Supplier".to_string(),
        cost: "MaterialCost".to_string(),
        weight: Some("Weight".to_string()),
    };
    mapping.quality.checked_at = "Date".to_string();
    mapping.quality.employee = "Employee".to_string();
    mapping.quality.weight = "Weight".to_string();
    mapping.quality.value = "Value".to_string();
    mapping
}

fn write_report(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_successful_load_becomes_current() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "report.csv", REPORT_CSV);
    let state = AppState::new(test_mapping(), DateFilter::Disabled);

    assert!(state.current().is_none());

    let loaded = state.load_file(&path).unwrap();
    let current = state.current().unwrap();
    assert_eq!(current.load_id, loaded.load_id);
    assert_eq!(current.clients.rows.len(), 1);
}

#[test]
fn test_failed_load_keeps_previous_dataset() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "report.csv", REPORT_CSV);
    let state = AppState::new(test_mapping(), DateFilter::Disabled);

    let first = state.load_file(&path).unwrap();

    let result = state.load_file(Path::new("missing.csv"));
    assert!(result.is_err());

    // Previous dataset survives the failure.
    let current = state.current().unwrap();
    assert_eq!(current.load_id, first.load_id);
}

#[test]
fn test_reload_replaces_dataset() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "report.csv", REPORT_CSV);
    let state = AppState::new(test_mapping(), DateFilter::Disabled);

    let first = state.load_file(&path).unwrap();
    let second = state.load_file(&path).unwrap();

    assert_ne!(first.load_id, second.load_id);
    assert_eq!(state.current().unwrap().load_id, second.load_id);
}

#[test]
fn test_clear_drops_dataset() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "report.csv", REPORT_CSV);
    let state = AppState::new(test_mapping(), DateFilter::Disabled);

    state.load_file(&path).unwrap();
    state.clear();
    assert!(state.current().is_none());
}
