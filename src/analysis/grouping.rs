// ==========================================
// Business Analytics - shared aggregation helpers
// ==========================================
// Grouping preserves first-encounter order so the later stable sort
// ties out to sheet encounter order. All divisions are guarded: a
// denominator <= 0 yields 0.0, never NaN/Inf.
// ==========================================

use std::cmp::Ordering;
use std::collections::HashMap;

/// Group rows by a string key, case-sensitive, preserving the order in
/// which keys are first encountered.
pub fn group_by_key<'a, T, F>(rows: &[&'a T], key: F) -> Vec<(String, Vec<&'a T>)>
where
    F: Fn(&T) -> &str,
{
    let mut groups: Vec<(String, Vec<&'a T>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let k = key(row);
        match index.get(k) {
            Some(&i) => groups[i].1.push(row),
            None => {
                index.insert(k.to_string(), groups.len());
                groups.push((k.to_string(), vec![row]));
            }
        }
    }

    groups
}

/// Percentage share of a total; 0.0 when the total is not positive.
pub fn share(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Plain ratio; 0.0 when the denominator is not positive.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Stable descending sort by a numeric rank field. Ties keep their
/// pre-sort (group-encounter) order.
pub fn sort_descending_by<T, F>(items: &mut [T], rank: F)
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| rank(b).partial_cmp(&rank(a)).unwrap_or(Ordering::Equal));
}
