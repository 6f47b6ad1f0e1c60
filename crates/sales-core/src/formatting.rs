/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use sales_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    // Handle the sign separately so the thousands grouping works on the
    // absolute value.
    let negative = value < 0.0;
    let abs_value = value.abs();

    // Round to the requested decimal places.
    // Add a tiny epsilon (half ULP at the target precision) before rounding
    // to avoid IEEE 754 binary-representation issues at exact midpoints.
    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    let integer_part = rounded.trunc() as u64;
    let frac_part = rounded - rounded.trunc();

    // Build the thousands-separated integer portion.
    let int_str = integer_part.to_string();
    let grouped = group_thousands(&int_str);

    let result = if decimals == 0 {
        grouped
    } else {
        // Format the fractional part to the exact number of decimals.
        let frac_str = format!("{:.prec$}", frac_part, prec = decimals as usize);
        // `frac_str` starts with "0.", e.g. "0.50". Strip the leading "0".
        let decimal_digits = &frac_str[1..]; // ".50"
        format!("{}{}", grouped, decimal_digits)
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format a monetary amount as a KRW string with thousands separators and no
/// decimal places, matching the original dashboard's `₩{value:,.0f}` format.
///
/// # Examples
///
/// ```
/// use sales_core::formatting::format_currency;
///
/// assert_eq!(format_currency(12_000_000.0), "₩12,000,000");
/// assert_eq!(format_currency(0.0),          "₩0");
/// assert_eq!(format_currency(20_333_333.3), "₩20,333,333");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("₩-{}", format_number(amount.abs(), 0))
    } else {
        format!("₩{}", format_number(amount, 0))
    }
}

/// Format a growth rate as a percentage string with one decimal place.
///
/// # Examples
///
/// ```
/// use sales_core::formatting::format_percent;
///
/// assert_eq!(format_percent(18.4),  "18.4%");
/// assert_eq!(format_percent(-14.1), "-14.1%");
/// assert_eq!(format_percent(0.0),   "0.0%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Percentage change of `current` relative to `prior`.
///
/// Returns `0.0` when `prior` is zero to avoid division by zero. Used for
/// display-only aggregates (e.g. the table totals row); per-record growth
/// rates come from the source data and are never derived here.
///
/// # Examples
///
/// ```
/// use sales_core::formatting::change_percent;
///
/// assert!((change_percent(120.0, 100.0) - 20.0).abs() < 1e-9);
/// assert_eq!(change_percent(50.0, 0.0), 0.0);
/// ```
pub fn change_percent(current: f64, prior: f64) -> f64 {
    if prior == 0.0 {
        return 0.0;
    }
    ((current - prior) / prior) * 100.0
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
