//! Lenient decoding of client-supplied column values
//!
//! Request bodies are bound to the database as received, so a text column
//! may arrive as a number and an integer column as a numeric string. These
//! helpers accept any JSON scalar and coerce it the way MySQL would on
//! insert. Arrays and objects are still rejected.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Any JSON scalar
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl ScalarValue {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Integer(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Boolean(b) => String::from(if b { "1" } else { "0" }),
        }
    }

    fn into_integer(self) -> Option<i32> {
        match self {
            Self::Text(s) => {
                let s = s.trim();
                match s.parse::<i64>() {
                    Ok(n) => i32::try_from(n).ok(),
                    Err(_) => s.parse::<f64>().ok().and_then(round_to_i32),
                }
            }
            Self::Integer(n) => i32::try_from(n).ok(),
            Self::Float(f) => round_to_i32(f),
            Self::Boolean(b) => Some(i32::from(b)),
        }
    }
}

// MySQL rounds half away from zero when storing a fraction in an INT column
fn round_to_i32(value: f64) -> Option<i32> {
    let rounded = value.round();

    if rounded.is_finite() && rounded >= f64::from(i32::MIN) && rounded <= f64::from(i32::MAX) {
        Some(rounded as i32)
    } else {
        None
    }
}

/// Text column: null stays `None`, any other scalar is stringified
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ScalarValue>::deserialize(deserializer)?.map(ScalarValue::into_text))
}

/// Integer column: accepts numbers and numeric strings
pub fn optional_integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<ScalarValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => {
            let shown = value.clone().into_text();
            value
                .into_integer()
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid integer value '{}'", shown)))
        }
    }
}
