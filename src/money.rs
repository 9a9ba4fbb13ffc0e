//! Money rounding and display formatting
//!
//! Small pure functions shared by every price computation in the engine.
//! All monetary amounts are VND carried as `f64`; [`round2`] must be applied
//! to every derived total before it is displayed or submitted, so that
//! floating-point drift cannot accumulate across repeated additions.

/// Rounds an amount to two decimal places using round-half-up semantics.
///
/// Example: `round2(10.125)` is `10.13`.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Formats an amount the way the storefront displays VND prices:
/// thousands grouped with `.` and a ` ₫` suffix, no decimal places.
///
/// Example output: `"12.000.000 ₫"`.
///
/// Display-only; the returned string never feeds back into computation.
pub fn format_vnd(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if whole < 0 { "-" } else { "" };
    format!("{}{} ₫", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_half_up() {
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(10.125), 10.13);
        assert_eq!(round2(1_234_567.894), 1_234_567.89);
    }

    #[test]
    fn round2_is_idempotent() {
        let once = round2(25_000.000000000004);
        assert_eq!(once, 25_000.0);
        assert_eq!(round2(once), once);
    }

    #[test]
    fn round2_leaves_whole_amounts_untouched() {
        assert_eq!(round2(12_000_000.0), 12_000_000.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn formats_vnd_with_dot_grouping() {
        assert_eq!(format_vnd(12_000_000.0), "12.000.000 ₫");
        assert_eq!(format_vnd(30_000.0), "30.000 ₫");
        assert_eq!(format_vnd(950.0), "950 ₫");
        assert_eq!(format_vnd(0.0), "0 ₫");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_vnd(-1_200_000.0), "-1.200.000 ₫");
    }
}
