/// Distance from the nearest integer below which a result is printed as that
/// integer.
pub const INTEGER_TOLERANCE: f64 = 1e-12;

/// Number of significant digits used for non-integral results.
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Magnitude from which rounded values no longer fit an `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Renders an evaluation result.
///
/// If `value` is within [`INTEGER_TOLERANCE`] of an integer that fits in an
/// `i64`, that integer is printed. Otherwise the value is printed with
/// [`SIGNIFICANT_DIGITS`] significant digits, trailing zeros removed, switching
/// to exponent notation for very small or very large magnitudes (the `%.15g`
/// convention). Non-finite values render as `inf`, `-inf` and `nan`.
///
/// ## Example
/// ```
/// use pyarith::util::num::format_number;
///
/// assert_eq!(format_number(2.0), "2");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333333333333");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(1.5e20), "1.5e+20");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_TOLERANCE && rounded.abs() < I64_LIMIT {
        #[allow(clippy::cast_possible_truncation)]
        let integer = rounded as i64;
        return integer.to_string();
    }

    format_significant(value, SIGNIFICANT_DIGITS)
}

/// Formats a finite `value` with `digits` significant digits like C's `%g`.
fn format_significant(value: f64, digits: usize) -> String {
    let precision = digits.saturating_sub(1);
    let scientific = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let digits = i32::try_from(digits).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}",
                       trim_fraction(mantissa),
                       exponent.unsigned_abs());
    }

    let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

/// Strips trailing zeros after a decimal point, and the point itself if
/// nothing remains behind it.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
