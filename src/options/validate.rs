//! Per-key validators shared by the configuration block and per-call overrides.
//!
//! Each validator takes the raw JSON value supplied by the host and either
//! normalises it into a typed value or returns [`Error::Validation`] naming
//! the offending key.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::types::{DeviceProfile, FloatRange, VendorEnum};
use crate::{Error, ErrorContext, Result};

static LANGUAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[a-z]{2,3}-[A-Z]{2})?$").expect("valid language regex"));

static VOICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?P<lang>[a-z]{2,3}-[A-Z]{2})-.*-[A-Z])?$").expect("valid voice regex")
});

fn invalid(key: &str, value: &Value, msg: impl Into<String>) -> Error {
    Error::validation_with_context(
        msg,
        ErrorContext::new()
            .with_field_path(key)
            .with_details(value.to_string())
            .with_source("option_validator"),
    )
}

fn string<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| invalid(key, value, "expected a string"))
}

/// Upper-cases the value and matches it against the vendor enum.
pub fn upper_enum<T: VendorEnum>(key: &str, value: &Value) -> Result<T> {
    let name = string(key, value)?.to_uppercase();
    T::from_name(&name).ok_or_else(|| {
        invalid(
            key,
            value,
            format!("value must be one of {:?}", T::names()),
        )
    })
}

/// Lower-cases the value and matches it against the vendor enum.
pub fn lower_enum<T: VendorEnum>(key: &str, value: &Value) -> Result<T> {
    let name = string(key, value)?.to_lowercase();
    T::from_name(&name).ok_or_else(|| {
        invalid(
            key,
            value,
            format!("value must be one of {:?}", T::names()),
        )
    })
}

pub fn language(key: &str, value: &Value) -> Result<String> {
    let s = string(key, value)?;
    if !LANGUAGE_RE.is_match(s) {
        return Err(invalid(key, value, "value does not match xx-XX language tag"));
    }
    Ok(s.to_string())
}

pub fn voice(key: &str, value: &Value) -> Result<String> {
    let s = string(key, value)?;
    if !VOICE_RE.is_match(s) {
        return Err(invalid(key, value, "value does not match xx-XX-...-X voice name"));
    }
    Ok(s.to_string())
}

/// The `xx-XX` (or `xxx-XX`) language prefix embedded in a voice name.
pub fn voice_language(voice: &str) -> Option<&str> {
    VOICE_RE
        .captures(voice)
        .and_then(|caps| caps.name("lang"))
        .map(|m| m.as_str())
}

/// Coerces numbers, numeric strings and booleans to `f64`, then clamps into `range`.
pub fn bounded_float(key: &str, value: &Value, range: FloatRange) -> Result<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| invalid(key, value, "expected float"))?;
    if number.is_nan() {
        return Err(invalid(key, value, "expected float"));
    }
    Ok(range.clamp(number))
}

/// Wraps a single value into a list, then checks every element is a known profile.
pub fn profiles(key: &str, value: &Value) -> Result<Vec<DeviceProfile>> {
    let items: Vec<&Value> = match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    items
        .into_iter()
        .map(|item| {
            let name = string(key, item)?;
            DeviceProfile::from_name(name).ok_or_else(|| {
                invalid(
                    key,
                    item,
                    format!("value must be one of {:?}", DeviceProfile::names()),
                )
            })
        })
        .collect()
}
