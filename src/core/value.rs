//! Dynamic field values.
//!
//! Form inputs deliver text, fetched records deliver JSON, and defaults are
//! whatever the host writes down. [`FieldValue`] holds all of them, and
//! carries the loose truthiness and numeric coercion rules that the
//! validation rules of browser forms are written against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single form value.
///
/// The engine never inspects values; only rules and payload encoding do.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// No value at all. Omitted from JSON payloads.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    #[serde(with = "number_repr")]
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
    Record(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Loose truthiness: `Undefined`, `Null`, `false`, `0`, `NaN` and the
    /// empty string are falsy, everything else is truthy.
    ///
    /// ```rust
    /// use formstate::core::FieldValue;
    ///
    /// assert!(!FieldValue::from("").is_truthy());
    /// assert!(FieldValue::from(" ").is_truthy());
    /// assert!(!FieldValue::from(0).is_truthy());
    /// assert!(FieldValue::List(vec![]).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::List(_) | Self::Record(_) => true,
        }
    }

    /// Loose numeric conversion.
    ///
    /// Text is trimmed before parsing, so blank text converts to `0`.
    /// `Undefined` and records convert to `NaN`, `Null` to `0`, and lists
    /// through their comma-joined text.
    ///
    /// ```rust
    /// use formstate::core::FieldValue;
    ///
    /// assert_eq!(FieldValue::from(" 12.5 ").to_number(), 12.5);
    /// assert_eq!(FieldValue::from(" ").to_number(), 0.0);
    /// assert_eq!(FieldValue::from("0x1f").to_number(), 31.0);
    /// assert!(FieldValue::from("12abc").to_number().is_nan());
    /// assert!(FieldValue::Undefined.to_number().is_nan());
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Record(_) => f64::NAN,
            Self::Null => 0.0,
            Self::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Number(n) => *n,
            Self::Text(s) => text_to_number(s),
            Self::List(_) => text_to_number(&self.to_text()),
        }
    }

    /// True when [`to_number`](Self::to_number) yields `NaN`.
    pub fn is_nan(&self) -> bool {
        self.to_number().is_nan()
    }

    /// True for text made only of whitespace, including the empty string.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim_matches(is_space).is_empty())
    }

    /// Text form of the value, as an input element would display it.
    pub fn to_text(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_string(),
            Self::Null => "null".to_string(),
            _ => self.joined_text(),
        }
    }

    /// Text form used inside lists, where empty slots print as nothing.
    fn joined_text(&self) -> String {
        match self {
            Self::Undefined | Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => number_to_text(*n),
            Self::Text(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(FieldValue::joined_text)
                .collect::<Vec<_>>()
                .join(","),
            Self::Record(_) => "[object Object]".to_string(),
        }
    }

    /// Encode as JSON for request bodies.
    ///
    /// `Undefined` becomes `null` here; map encoders drop such keys instead.
    /// Non-finite numbers become `null` and integral numbers are written
    /// without a fraction.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;

        match self {
            Self::Undefined | Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => number_to_json(*n),
            Self::Text(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().map(FieldValue::to_json).collect()),
            Self::Record(fields) => Value::Object(
                fields
                    .iter()
                    .filter(|(_, v)| !matches!(v, FieldValue::Undefined))
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

// Largest integer an f64 represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn number_to_json(n: f64) -> serde_json::Value {
    if !n.is_finite() {
        return serde_json::Value::Null;
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}

// WhiteSpace and LineTerminator as browser number parsing trims them.
// Unlike `char::is_whitespace`, U+0085 is not in the set.
fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn text_to_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_space);
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let prefixed = trimmed
        .get(..2)
        .map(|p| p.to_ascii_lowercase())
        .and_then(|p| match p.as_str() {
            "0x" => Some(16),
            "0o" => Some(8),
            "0b" => Some(2),
            _ => None,
        });
    if let Some(radix) = prefixed {
        return radix_to_number(&trimmed[2..], radix);
    }

    // Rust's float parser also accepts "inf", "nan" and friends; form input does not.
    let decimal_chars = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal_chars {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_to_number(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Serde form of `Number`.
///
/// JSON has no literal for non-finite numbers, so human-readable formats
/// write them as the strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
/// Binary formats keep the raw `f64`.
mod number_repr {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if n.is_finite() || !serializer.is_human_readable() {
            serializer.serialize_f64(*n)
        } else {
            serializer.serialize_str(&super::number_to_text(*n))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(NumberVisitor)
        } else {
            deserializer.deserialize_f64(NumberVisitor)
        }
    }

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or one of \"NaN\", \"Infinity\", \"-Infinity\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(value: Vec<FieldValue>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(FieldValue::from).collect()),
            Value::Object(fields) => Self::Record(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}
