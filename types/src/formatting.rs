//! Number formatting for statistic values and tooltips.
//!
//! Every number shown by a statistic goes through this module so text and
//! JSON renderers agree, including the European style (`.` and `,`
//! swapped).

/// Swap `.` and `,` in an already formatted number.
fn europeanize(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '.' => ',',
            ',' => '.',
            other => other,
        })
        .collect()
}

#[inline]
fn maybe_eu(s: String, european: bool) -> String {
    if european { europeanize(&s) } else { s }
}

/// Format an integer with thousands separators.
///
/// Unlike raw combat log values, zero is shown as `0`: a statistic that
/// gained nothing still reports it.
///
/// # Examples
/// ```
/// use tally_types::formatting::format_thousands;
/// assert_eq!(format_thousands(0, false), "0");
/// assert_eq!(format_thousands(1_500, false), "1,500");
/// assert_eq!(format_thousands(1_500_000, true), "1.500.000");
/// assert_eq!(format_thousands(-2_000, false), "-2,000");
/// ```
pub fn format_thousands(n: i64, european: bool) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        grouped.insert(0, '-');
    }
    maybe_eu(grouped, european)
}

/// Format a large number with a K/M suffix.
///
/// # Examples
/// ```
/// use tally_types::formatting::format_compact;
/// assert_eq!(format_compact(950, false), "950");
/// assert_eq!(format_compact(12_340, false), "12.34K");
/// assert_eq!(format_compact(2_500_000, true), "2,50M");
/// ```
pub fn format_compact(n: i64, european: bool) -> String {
    let abs = n.unsigned_abs();
    let s = if abs >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if abs >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    };
    maybe_eu(s, european)
}

/// Format a decimal number with the given precision.
///
/// # Examples
/// ```
/// use tally_types::formatting::format_decimal;
/// assert_eq!(format_decimal(17.5, 1, false), "17.5");
/// assert_eq!(format_decimal(17.5, 1, true), "17,5");
/// ```
pub fn format_decimal(n: f64, precision: usize, european: bool) -> String {
    maybe_eu(format!("{:.prec$}", n, prec = precision), european)
}

/// Format a per-second rate from a total and a fight length in ms.
///
/// Returns `0` when the fight length is not positive.
pub fn format_per_second(total: i64, fight_ms: i64, european: bool) -> String {
    if fight_ms <= 0 {
        return "0".to_string();
    }
    let rate = total as f64 / (fight_ms as f64 / 1000.0);
    format_thousands(rate.round() as i64, european)
}
