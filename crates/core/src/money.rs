//! Price display formatting.
//!
//! Core float-to-decimal formatting has had wasm-facing panics in some
//! toolchain/browser combinations, so prices are scaled and rounded into
//! integer cents and formatted from the integers.

/// Format a price with exactly two decimals: `12.5` → `"12.50"`.
///
/// Non-finite input formats as `"NaN"` / `"Inf"` / `"-Inf"` rather than
/// panicking; values whose cents overflow an `i64` degrade to `"Inf"`.
pub fn format_price(v: f64) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    let cents = (v * 100.0).round();
    if !cents.is_finite() || cents.abs() > i64::MAX as f64 {
        return if v.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    }

    let cents = cents as i64;
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let units = abs / 100;
    let sub = abs % 100;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&units.to_string());
    out.push('.');
    if sub < 10 {
        out.push('0');
    }
    out.push_str(&sub.to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_prices() {
        assert_eq!(format_price(25.0), "25.00");
        assert_eq!(format_price(12.5), "12.50");
        assert_eq!(format_price(4.99), "4.99");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(2.99), "2.99");
        assert_eq!(format_price(0.05), "0.05");
    }

    #[test]
    fn rounds_to_the_nearest_cent() {
        assert_eq!(format_price(1.005), "1.00");
        assert_eq!(format_price(1.0051), "1.01");
        assert_eq!(format_price(9.999), "10.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        assert_eq!(format_price(-3.5), "-3.50");
        assert_eq!(format_price(-0.4), "-0.40");
    }

    #[test]
    fn non_finite_degrades_without_panicking() {
        assert_eq!(format_price(f64::NAN), "NaN");
        assert_eq!(format_price(f64::INFINITY), "Inf");
        assert_eq!(format_price(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_price(1e300), "Inf");
    }
}
