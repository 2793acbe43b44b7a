/// Formats an evaluation result for display.
///
/// A finite value without a fractional part is printed as an integer, with no
/// decimal point and no sign on zero. Other finite values use the shortest
/// decimal representation that reads back to the same `f64`. NaN and the
/// infinities are spelled out.
///
/// ## Example
/// ```
/// use keypad::util::format::format_result;
///
/// assert_eq!(format_result(4.0), "4");
/// assert_eq!(format_result(4.5), "4.5");
/// assert_eq!(format_result(-12.0), "-12");
/// assert_eq!(format_result(-0.0), "0");
/// assert_eq!(format_result(0.09), "0.09");
/// assert_eq!(format_result(1e21), "1000000000000000000000");
/// assert_eq!(format_result(f64::NAN), "NaN");
/// assert_eq!(format_result(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if value.fract() == 0.0 {
        // `-0.0` prints as "-0" otherwise
        let value = if value == 0.0 { 0.0 } else { value };
        return format!("{value:.0}");
    }

    value.to_string()
}
