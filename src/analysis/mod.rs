// ==========================================
// Business Analytics - analysis layer
// ==========================================
// Five group-by-and-sum aggregators, one per facet, sharing the
// grouping/guarded-division helpers. All pure functions over the
// extracted row lists; the date filter is a caller decision.
// ==========================================

pub mod clients;
pub mod contractors;
pub mod grouping;
pub mod quality;
pub mod suppliers;
pub mod transport;

pub use clients::analyze_clients;
pub use contractors::analyze_contractors;
pub use quality::{analyze_quality, daily_checked_weight};
pub use suppliers::analyze_suppliers;
pub use transport::analyze_transport;
