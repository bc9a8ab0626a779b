//! JSON request bodies and their conversion into domain values.
//!
//! Every form deserializes leniently (all fields optional, numbers accepted
//! as strings) and is turned into a domain value with `TryFrom`, which is
//! where required fields, `validator` rules and enumerated labels are
//! checked.

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::{Age, Amount, TypeConstraintError};

pub mod appointments;
pub mod auth;
pub mod billing;
pub mod patients;

/// Message returned when an appointment or bill misses a required field.
pub const REQUIRED_FIELDS_MISSING: &str = "Required fields missing";

#[derive(Debug, Error)]
pub enum FormError {
    /// One or more required fields were absent or blank.
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0} must be a number")]
    InvalidNumber(&'static str),
    #[error("{0}")]
    InvalidValue(String),
}

impl From<TypeConstraintError> for FormError {
    fn from(err: TypeConstraintError) -> Self {
        FormError::InvalidValue(err.to_string())
    }
}

/// A JSON number or a string holding one.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumberInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberInput {
    /// Whole number; a blank string is `None`.
    pub fn to_i64(&self, field: &'static str) -> Result<Option<i64>, FormError> {
        match self {
            NumberInput::Int(value) => Ok(Some(*value)),
            NumberInput::Float(value) if value.fract() == 0.0 && value.is_finite() => {
                Ok(Some(*value as i64))
            }
            NumberInput::Float(_) => Err(FormError::InvalidNumber(field)),
            NumberInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse::<i64>()
                    .map(Some)
                    .map_err(|_| FormError::InvalidNumber(field))
            }
        }
    }

    /// Decimal number; a blank string is `None`.
    pub fn to_f64(&self, field: &'static str) -> Result<Option<f64>, FormError> {
        match self {
            NumberInput::Int(value) => Ok(Some(*value as f64)),
            NumberInput::Float(value) => Ok(Some(*value)),
            NumberInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse::<f64>()
                    .map(Some)
                    .map_err(|_| FormError::InvalidNumber(field))
            }
        }
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`). Use together with `#[serde(default)]`.
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Trimmed text, with blank treated as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Patch semantics for optional text: absent stays absent, `null` or blank
/// clears.
pub(crate) fn nullable_text(value: Option<Option<String>>) -> Option<Option<String>> {
    value.map(non_blank)
}

/// Prefixes a constraint failure with the offending field name.
pub(crate) fn field<T>(
    name: &str,
    result: Result<T, TypeConstraintError>,
) -> Result<T, FormError> {
    result.map_err(|e| FormError::InvalidValue(format!("{name}: {e}")))
}

/// Parses a non-blank label with the enum's strict parser.
pub(crate) fn label<T>(
    name: &str,
    value: Option<String>,
    parse: fn(&str) -> Result<T, TypeConstraintError>,
) -> Result<Option<T>, FormError> {
    non_blank(value)
        .map(|value| field(name, parse(&value)))
        .transpose()
}

pub(crate) fn age(value: Option<&NumberInput>) -> Result<Option<Age>, FormError> {
    match value {
        Some(input) => input
            .to_i64("age")?
            .map(|years| field("age", Age::new(years)))
            .transpose(),
        None => Ok(None),
    }
}

pub(crate) fn amount(value: Option<&NumberInput>) -> Result<Option<Amount>, FormError> {
    match value {
        Some(input) => input
            .to_f64("amount")?
            .map(|value| field("amount", Amount::new(value)))
            .transpose(),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        notes: Option<Option<String>>,
    }

    #[test]
    fn numbers_are_accepted_as_numbers_or_strings() {
        let parsed: Vec<NumberInput> = serde_json::from_value(json!([45, 12.5, "30", " "])).unwrap();
        assert_eq!(parsed[0].to_i64("age").unwrap(), Some(45));
        assert_eq!(parsed[1].to_f64("amount").unwrap(), Some(12.5));
        assert_eq!(parsed[2].to_i64("age").unwrap(), Some(30));
        assert_eq!(parsed[3].to_f64("amount").unwrap(), None);
    }

    #[test]
    fn garbage_numbers_are_rejected() {
        let input = NumberInput::Text("forty".into());
        assert!(matches!(
            input.to_i64("age"),
            Err(FormError::InvalidNumber("age"))
        ));
        assert!(NumberInput::Float(4.5).to_i64("age").is_err());
    }

    #[test]
    fn double_option_tells_null_from_absent() {
        let absent: Patch = serde_json::from_value(json!({})).unwrap();
        let null: Patch = serde_json::from_value(json!({"notes": null})).unwrap();
        let set: Patch = serde_json::from_value(json!({"notes": "fasting"})).unwrap();
        assert_eq!(absent.notes, None);
        assert_eq!(null.notes, Some(None));
        assert_eq!(set.notes, Some(Some("fasting".to_string())));
    }

    #[test]
    fn blank_optional_text_clears() {
        assert_eq!(nullable_text(Some(Some("  ".into()))), Some(None));
        assert_eq!(nullable_text(None), None);
    }

    #[test]
    fn age_and_amount_enforce_ranges() {
        assert!(age(Some(&NumberInput::Int(200))).is_err());
        assert!(amount(Some(&NumberInput::Text("-5".into()))).is_err());
        assert_eq!(
            amount(Some(&NumberInput::Text("150.00".into())))
                .unwrap()
                .map(Amount::get),
            Some(150.0)
        );
    }
}
