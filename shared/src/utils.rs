//! # Shared Utility Functions
//!
//! Display helpers used by every front end of the client.
//!
//! ## Money Formatting
//!
//! Amounts travel as `f64` rupiah values. For display they are rounded to whole
//! rupiah and grouped with `.` as the thousands separator:
//! - [`format_rupiah`] - `1500000.0` → `"Rp 1.500.000"`
//! - [`format_signed_rupiah`] - prefixes `+`/`-` for income/expense rows
//! - [`format_percentage`] - one decimal place, as shown on budget cards
//!
//! ```rust
//! use shared::utils::format_rupiah;
//!
//! assert_eq!(format_rupiah(1_500_000.0), "Rp 1.500.000");
//! ```

/// Group the digits of a non-negative integer with `.` separators.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an amount as rupiah, rounded to the nearest whole rupiah.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_rupiah;
///
/// assert_eq!(format_rupiah(0.0), "Rp 0");
/// assert_eq!(format_rupiah(999.4), "Rp 999");
/// assert_eq!(format_rupiah(-25_000.0), "-Rp 25.000");
/// ```
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp -".to_string();
    }
    let rounded = amount.round();
    // Saturating float-to-int cast; amounts beyond u64 are not meaningful here
    let magnitude = rounded.abs() as u64;
    if rounded < 0.0 && magnitude > 0 {
        format!("-Rp {}", group_thousands(magnitude))
    } else {
        format!("Rp {}", group_thousands(magnitude))
    }
}

/// Format an amount with an explicit sign for income (`+`) or expense (`-`).
pub fn format_signed_rupiah(amount: f64, is_income: bool) -> String {
    let body = format_rupiah(amount.abs());
    if is_income {
        format!("+{}", body)
    } else {
        format!("-{}", body)
    }
}

/// Format a percentage with one decimal place.
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah_grouping() {
        assert_eq!(format_rupiah(1.0), "Rp 1");
        assert_eq!(format_rupiah(1_000.0), "Rp 1.000");
        assert_eq!(format_rupiah(12_345_678.0), "Rp 12.345.678");
        assert_eq!(format_rupiah(100_000.0), "Rp 100.000");
    }

    #[test]
    fn test_format_rupiah_rounding_and_sign() {
        assert_eq!(format_rupiah(1_499.6), "Rp 1.500");
        assert_eq!(format_rupiah(-0.2), "Rp 0");
        assert_eq!(format_rupiah(-1_500_000.0), "-Rp 1.500.000");
        assert_eq!(format_rupiah(f64::NAN), "Rp -");
    }

    #[test]
    fn test_format_signed_rupiah() {
        assert_eq!(format_signed_rupiah(50_000.0, true), "+Rp 50.000");
        assert_eq!(format_signed_rupiah(50_000.0, false), "-Rp 50.000");
        assert_eq!(format_signed_rupiah(-50_000.0, false), "-Rp 50.000");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(95.0), "95.0%");
        assert_eq!(format_percentage(72.456), "72.5%");
    }
}
