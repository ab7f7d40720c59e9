//! Result rounding and display formatting.

/// Decimal places kept when absorbing floating-point noise.
pub const DISPLAY_DECIMALS: usize = 10;

/// Beyond this magnitude an `f64` has no digits left at the tenth decimal place.
const ROUNDING_LIMIT: f64 = 1e15;

/// Rounds `value` to [`DISPLAY_DECIMALS`] decimal places.
///
/// Rounding goes through the correctly rounded decimal expansion rather than
/// scaling by a power of ten, which would overflow for large inputs.
pub fn round_result(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    format!("{:.*}", DISPLAY_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}

/// Formats a finite result for display.
///
/// Integral values print without a fractional part; everything else prints the
/// shortest decimal that reads back as the rounded value.
///
/// # Examples
///
/// ```
/// use tcalc::domain::format_result;
///
/// assert_eq!(format_result(4.0), "4");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
/// ```
pub fn format_result(value: f64) -> String {
    let rounded = round_result(value);

    if rounded == 0.0 {
        // Also covers negative zero.
        "0".to_string()
    } else if rounded == rounded.trunc() {
        format!("{:.0}", rounded)
    } else {
        rounded.to_string()
    }
}
