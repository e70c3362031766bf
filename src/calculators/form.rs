//! Named form fields as submitted by a tool form (or typed as `key=value`).

use std::str::FromStr;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::error::ValidationError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    values: FxHashMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated `key=value` pairs. Tokens without `=` are ignored.
    pub fn parse_pairs(input: &str) -> Self {
        let mut fields = Self::new();
        for token in input.split_whitespace() {
            if let Some((key, value)) = token.split_once('=') {
                fields.set(key, value);
            }
        }
        fields
    }

    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.values
            .insert(key.trim().to_lowercase(), value.trim().to_string());
        self
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Raw value; blank counts as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Required select value parsed with `FromStr`.
    pub fn choice<T>(&self, key: &'static str) -> Result<T, ValidationError>
    where
        T: FromStr<Err = ValidationError>,
    {
        self.text(key)
            .ok_or(ValidationError::Missing { field: key })?
            .parse()
    }

    /// Select value with a default when absent.
    pub fn choice_or<T>(&self, key: &'static str, default: T) -> Result<T, ValidationError>
    where
        T: FromStr<Err = ValidationError>,
    {
        match self.text(key) {
            Some(value) => value.parse(),
            None => Ok(default),
        }
    }

    /// Numeric field. Absent or unparsable input reads as NaN, which every
    /// calculator rejects as missing.
    pub fn number(&self, key: &str) -> f64 {
        self.text(key)
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }

    /// Optional numeric field; unparsable input counts as absent.
    pub fn optional_number(&self, key: &str) -> Option<f64> {
        self.text(key).and_then(|v| v.parse::<f64>().ok())
    }

    /// ISO `YYYY-MM-DD` date field.
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.text(key)
            .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let fields = FormFields::parse_pairs("crop=Wheat area=10  junk date=2024-06-01");
        assert_eq!(fields.text("crop"), Some("Wheat"));
        assert_eq!(fields.number("area"), 10.0);
        assert_eq!(fields.date("date"), NaiveDate::from_ymd_opt(2024, 6, 1));
        assert!(fields.text("junk").is_none());
    }

    #[test]
    fn test_blank_and_bad_numbers() {
        let fields = FormFields::new().with("area", "").with("price", "abc");
        assert!(fields.number("area").is_nan());
        assert!(fields.number("price").is_nan());
        assert!(fields.optional_number("price").is_none());
    }
}
