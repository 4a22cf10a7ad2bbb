// ==========================================
// Business Analytics - API layer
// ==========================================

pub mod report_api;

pub use report_api::ReportApi;
