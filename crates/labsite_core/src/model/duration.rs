//! Year/month value model for publication years and project periods.
//!
//! # Invariants
//! - Values keep the shape they arrived in (number or text); conversion to
//!   display form happens in `format::duration`.
//! - Decoding never fails: integral numbers (`2020` or `2020.0`) become
//!   `Number`, any other JSON scalar or structure is kept as literal `Text`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Year given either as a number or as free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(i64),
    Text(String),
}

impl YearValue {
    /// Numeric value used for ordering, when the year parses as an integer.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(value) => value.trim().parse().ok(),
        }
    }
}

impl Display for YearValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for YearValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match integral_or_literal(Value::deserialize(deserializer)?) {
            Ok(number) => Self::Number(number),
            Err(text) => Self::Text(text),
        })
    }
}

impl From<i64> for YearValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for YearValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Month given as a 1-12 index or as an already formatted label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum MonthValue {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for MonthValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match integral_or_literal(Value::deserialize(deserializer)?) {
            Ok(number) => Self::Number(number),
            Err(text) => Self::Text(text),
        })
    }
}

impl From<i64> for MonthValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MonthValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Splits a decoded JSON value into an integer or its literal text.
fn integral_or_literal(value: Value) -> Result<i64, String> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|float| float.fract() == 0.0 && float.abs() < 1e15)
                    .map(|float| float as i64)
            })
            .ok_or_else(|| number.to_string()),
        Value::String(text) => Err(text),
        Value::Null => Err(String::new()),
        other => Err(other.to_string()),
    }
}

/// One endpoint of a project period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DurationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<YearValue>,
}

impl DurationSpec {
    pub fn year(year: impl Into<YearValue>) -> Self {
        Self {
            month: None,
            year: Some(year.into()),
        }
    }

    pub fn month_year(month: impl Into<MonthValue>, year: impl Into<YearValue>) -> Self {
        Self {
            month: Some(month.into()),
            year: Some(year.into()),
        }
    }
}
