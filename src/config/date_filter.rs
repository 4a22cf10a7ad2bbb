// ==========================================
// Business Analytics - date filter
// ==========================================
// One explicit filter parameter shared by all five aggregators. The
// caller decides; no facet hard-codes its own filtering behavior.
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date-range filter applied during aggregation.
///
/// Bounds are inclusive calendar days. Rows without a date never match
/// an enabled range; with `Disabled` every row passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFilter {
    Disabled,
    Range { start: NaiveDate, end: NaiveDate },
}

impl DateFilter {
    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        DateFilter::Range { start, end }
    }

    pub fn accepts(&self, date: Option<NaiveDateTime>) -> bool {
        match self {
            DateFilter::Disabled => true,
            DateFilter::Range { start, end } => match date {
                // An absent date must not silently pass a time window.
                None => false,
                Some(dt) => {
                    let day = dt.date();
                    day >= *start && day <= *end
                }
            },
        }
    }
}

impl Default for DateFilter {
    fn default() -> Self {
        DateFilter::Disabled
    }
}
