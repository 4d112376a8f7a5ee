// Text <-> number helpers for the value field.
// All of these are total: malformed text degrades to 0 instead of failing.

/// Live pass applied on every input event: the comma decimal separator becomes a dot.
/// Only the first comma is replaced, everything else is left as typed.
pub fn normalize_typed(raw: &str) -> String {
    raw.replacen(',', ".", 1)
}

/// Find the first signed decimal token (`-?digits(.digits)?`) in `text`.
///
/// Leftmost match wins. A minus sign only counts when a digit follows it, a dot
/// only when a digit follows it, and a second dot ends the token
/// ("12.4.5" -> 12.4). A digit run too long for `f64` saturates to
/// `f64::MAX`. Returns `None` when the text holds no digit at all.
pub fn extract_first_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let is_digit_at = |i: usize| bytes.get(i).is_some_and(|b| b.is_ascii_digit());

    let start = (0..bytes.len())
        .find(|&i| is_digit_at(i) || (bytes[i] == b'-' && is_digit_at(i + 1)))?;

    let mut end = start;
    if bytes[end] == b'-' {
        end += 1;
    }
    while is_digit_at(end) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') && is_digit_at(end + 1) {
        end += 1;
        while is_digit_at(end) {
            end += 1;
        }
    }

    // Token is pure ASCII, so the byte range is a valid str slice
    text[start..end]
        .parse::<f64>()
        .ok()
        .map(|v| if v.is_infinite() { v.signum() * f64::MAX } else { v })
}

/// Leading-number parse of the text currently shown in the field.
///
/// Skips leading whitespace, accepts an optional sign, a digit run and an
/// optional fractional part, and ignores whatever follows ("12.3abc" -> 12.3).
/// Text that does not start with a number yields `None`.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(|b| b.is_ascii_digit()) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    trimmed[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Clamp `value` into [min, max]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Round to `decimals` fractional digits. Values too large to scale are returned as-is.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = (value * factor).round();
    if scaled.is_finite() {
        scaled / factor
    } else {
        value
    }
}

/// Whole numbers are shown without a decimal part, anything else with exactly
/// `decimals` fractional digits.
pub fn format_value(value: f64, decimals: u32) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.*}", decimals as usize, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_typed() {
        assert_eq!(normalize_typed("12,3"), "12.3");
        assert_eq!(normalize_typed("12,3,4"), "12.3,4");
        assert_eq!(normalize_typed("abc"), "abc");
        assert_eq!(normalize_typed(""), "");
    }

    #[test]
    fn test_extract_first_number() {
        assert_eq!(extract_first_number("123a"), Some(123.0));
        assert_eq!(extract_first_number("12a3"), Some(12.0));
        assert_eq!(extract_first_number("a123"), Some(123.0));
        assert_eq!(extract_first_number("12.4.5"), Some(12.4));
        assert_eq!(extract_first_number("-10"), Some(-10.0));
        assert_eq!(extract_first_number("x-7.5y"), Some(-7.5));
        assert_eq!(extract_first_number("12."), Some(12.0));
        assert_eq!(extract_first_number(".5"), Some(5.0));
        assert_eq!(extract_first_number("--3"), Some(-3.0));
        assert_eq!(extract_first_number(&"9".repeat(400)), Some(f64::MAX));
        assert_eq!(extract_first_number(&format!("-{}", "9".repeat(400))), Some(-f64::MAX));
        assert_eq!(extract_first_number("abc"), None);
        assert_eq!(extract_first_number("-"), None);
        assert_eq!(extract_first_number(""), None);
    }

    #[test]
    fn test_extract_ignores_non_ascii_digits() {
        assert_eq!(extract_first_number("٣٤"), None);
        assert_eq!(extract_first_number("€42"), Some(42.0));
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("12.3abc"), Some(12.3));
        assert_eq!(parse_leading_number("  7"), Some(7.0));
        assert_eq!(parse_leading_number("-0.5"), Some(-0.5));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("5."), Some(5.0));
        assert_eq!(parse_leading_number("12,3"), Some(12.0));
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number(""), None);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(20.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(99.9 + 0.1, 1), 100.0);
        assert_eq!(round_to_decimals(0.1 + 0.2, 1), 0.3);
        assert_eq!(round_to_decimals(12.25, 0), 12.0);
        assert_eq!(round_to_decimals(f64::MAX, 1), f64::MAX);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(50.0, 1), "50");
        assert_eq!(format_value(12.5, 1), "12.5");
        assert_eq!(format_value(0.0, 1), "0");
        assert_eq!(format_value(0.25, 2), "0.25");
    }
}
