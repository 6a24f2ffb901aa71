/// Money is represented as integer cents to avoid floating-point precision issues.
/// For EUR/USD, 1 unit = 100 cents, so €50.00 = 5000 cents.
pub type Cents = i64;

/// Round a sampled amount to currency precision.
/// Example: 224.137 -> 22414, 224.134 -> 22413
pub fn cents_from_amount(amount: f64) -> Cents {
    (amount * 100.0).round() as Cents
}

/// Convert cents back to currency units for numeric output.
/// Example: 22414 -> 224.14
pub fn units(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Format cents as a human-readable currency string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_from_amount() {
        assert_eq!(cents_from_amount(50.0), 5000);
        assert_eq!(cents_from_amount(224.137), 22414);
        assert_eq!(cents_from_amount(224.134), 22413);
        assert_eq!(cents_from_amount(0.004), 0);
        assert_eq!(cents_from_amount(-12.34), -1234);
    }

    #[test]
    fn test_units_roundtrip() {
        assert_eq!(units(22414), 224.14);
        assert_eq!(units(0), 0.0);
        assert_eq!(cents_from_amount(units(169012)), 169012);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-5000), "-50.00");
    }
}
