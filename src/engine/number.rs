//! Conversion between displayed text and numbers.
//!
//! Display text is parsed leniently: the longest numeric prefix wins and
//! anything else reads as NaN. Numbers are rendered in their shortest
//! round-trip form, switching to exponent notation outside the range
//! `1e-7 < |x| < 1e21`.

/// Largest decimal exponent rendered without exponent notation.
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Smallest decimal exponent rendered without exponent notation.
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Render a number the way the display shows it.
///
/// ```rust
/// use abacus::engine::format_number;
///
/// assert_eq!(format_number(81.0), "81");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7".
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();

    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (whole, fraction) = digits.split_at(n as usize);
        format!("{whole}.{fraction}")
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", e.abs())
        }
    }
}

/// Parse display text into a number.
///
/// Leading whitespace is skipped, then the longest prefix that forms a
/// decimal literal (or `Infinity`) is read. Text with no such prefix is
/// NaN.
///
/// ```rust
/// use abacus::engine::parse_number;
///
/// assert_eq!(parse_number("42"), 42.0);
/// assert_eq!(parse_number("1.2.3"), 1.2);
/// assert!(parse_number(".").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };
    let signed = |value: f64| if negative { -value } else { value };

    if text[pos..].starts_with("Infinity") {
        return signed(f64::INFINITY);
    }

    let whole_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let whole = &text[whole_start..pos];

    let mut fraction = "";
    if bytes.get(pos) == Some(&b'.') {
        let fraction_start = pos + 1;
        let mut end = fraction_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        fraction = &text[fraction_start..end];
        pos = end;
    }

    if whole.is_empty() && fraction.is_empty() {
        return f64::NAN;
    }

    let mut exponent = "0";
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let exponent_start = pos + 1;
        let mut end = exponent_start;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let digits_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > digits_start {
            exponent = &text[exponent_start..end];
        }
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    format!("{whole}.{fraction}e{exponent}")
        .parse::<f64>()
        .map(signed)
        .unwrap_or(f64::NAN)
}

/// Serde representation of a number as its display text.
///
/// JSON has no NaN or infinities; display text keeps them.
pub(crate) mod as_text {
    use super::{format_number, parse_number};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_number(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        from_text(&text).map_err(D::Error::custom)
    }

    pub(super) fn from_text(text: &str) -> Result<f64, String> {
        let value = parse_number(text);
        if value.is_nan() && text != "NaN" {
            return Err(format!("'{text}' is not a number"));
        }
        Ok(value)
    }
}

/// Display text for optional numbers; `None` stays `null`.
pub(crate) mod option_as_text {
    use super::as_text::from_text;
    use super::format_number;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_some(&format_number(*value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| from_text(&text).map_err(D::Error::custom))
            .transpose()
    }
}
