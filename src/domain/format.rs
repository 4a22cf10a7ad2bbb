// ==========================================
// Business Analytics - display formatting helpers
// ==========================================
// Table/chart cells use these; the data model itself stays numeric.
// ==========================================

/// Format a monetary or weight figure with thousands separators and
/// two decimals, e.g. `1234567.5` -> `"1,234,567.50"`.
pub fn fmt_amount(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rounded.as_str(), "00"),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Format a percentage with one decimal, e.g. `12.34` -> `"12.3%"`.
pub fn fmt_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
