//! Number formatting for summary text, axis ticks and tooltips.
//!
//! All output is en-US: `,` thousands separator, `.` decimal point.

/// Maximum fraction digits kept by [`locale_string`].
const MAX_FRACTION_DIGITS: usize = 3;

/// en-US grouping with up to 3 fraction digits, trailing zeros dropped.
/// `1234567.891` -> `"1,234,567.891"`, `50000.0` -> `"50,000"`.
pub fn locale_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let grouped = group_thousands(int_part);
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// `$` followed by the locale string. Used for axis ticks, tooltips, market cap and volume.
pub fn usd_locale(value: f64) -> String {
    format!("${}", locale_string(value))
}

/// `$` followed by exactly two decimals, no grouping: `"$50000.00"`.
pub fn usd_fixed2(value: f64) -> String {
    format!("${:.2}", value)
}

/// The raw number followed by `%`: `2.5` -> `"2.5%"`.
pub fn percent(value: f64) -> String {
    format!("{}%", value)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
