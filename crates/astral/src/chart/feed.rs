//! Typed boundary for the external provider's planetary feed.
//!
//! The provider sends loosely shaped JSON: an object keyed by integer strings
//! (or an array) whose entries 0..=12 are bodies and whose higher entries are
//! metadata. Everything is mapped into [`FeedBody`] records here so nothing
//! downstream touches raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::western::zodiac::normalize_degrees;

/// Highest feed index that carries a body
pub const MAX_BODY_INDEX: usize = 12;

/// Errors that can occur while reading a provider feed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Unexpected feed shape: {0}")]
    UnexpectedShape(String),
    #[error("Feed entry {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("Feed entry {index} has invalid '{field}': {message}")]
    InvalidField {
        index: usize,
        field: &'static str,
        message: String,
    },
    #[error("Feed unavailable: {0}")]
    Unavailable(String),
}

/// One body from the provider feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedBody {
    pub index: usize,
    pub name: String,
    pub full_degree: f64,
    pub norm_degree: f64,
    pub speed: f64,
    pub is_retro: bool,
    /// Provider sign index; may be absent or out of range
    pub current_sign: Option<i64>,
    /// 1-12, or 0 when the provider did not place the body
    pub house_number: u8,
    pub sign_lord: Option<String>,
}

impl FeedBody {
    /// Body with only the required fields set.
    pub fn new(index: usize, name: impl Into<String>, full_degree: f64) -> Self {
        let full_degree = normalize_degrees(full_degree);
        Self {
            index,
            name: name.into(),
            full_degree,
            norm_degree: full_degree % 30.0,
            speed: 0.0,
            is_retro: false,
            current_sign: None,
            house_number: 0,
            sign_lord: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawProviderFeed")]
pub struct ProviderFeed {
    bodies: Vec<FeedBody>,
}

#[derive(Deserialize)]
struct RawProviderFeed {
    #[serde(default)]
    bodies: Vec<FeedBody>,
}

impl From<RawProviderFeed> for ProviderFeed {
    fn from(raw: RawProviderFeed) -> Self {
        Self::new(raw.bodies)
    }
}

impl ProviderFeed {
    /// Bodies past index 12 are dropped; the rest are ordered by index,
    /// keeping the first body seen for each index.
    pub fn new(mut bodies: Vec<FeedBody>) -> Self {
        bodies.retain(|b| b.index <= MAX_BODY_INDEX);
        bodies.sort_by_key(|b| b.index);
        bodies.dedup_by_key(|b| b.index);
        Self { bodies }
    }

    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        let parsed: Value =
            serde_json::from_str(json).map_err(|e| FeedError::InvalidJson(e.to_string()))?;
        Self::from_value(&parsed)
    }

    pub fn from_value(value: &Value) -> Result<Self, FeedError> {
        let entries: Vec<(usize, &Value)> = match value {
            Value::Object(map) => indexed_entries(map),
            Value::Array(items) => items.iter().enumerate().collect(),
            other => {
                return Err(FeedError::UnexpectedShape(format!(
                    "expected an object or array, got {}",
                    json_type_name(other)
                )))
            }
        };

        let mut bodies = Vec::new();
        for (index, entry) in entries {
            if index > MAX_BODY_INDEX {
                log::debug!("Feed: ignoring metadata entry {}", index);
                continue;
            }
            let Some(obj) = entry.as_object() else {
                log::debug!("Feed: skipping non-object entry {}", index);
                continue;
            };
            bodies.push(parse_body(index, obj)?);
        }

        Ok(Self::new(bodies))
    }

    pub fn bodies(&self) -> &[FeedBody] {
        &self.bodies
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }
}

/// Only canonical integer keys count: "01" or " 1" would alias "1".
fn indexed_entries(map: &Map<String, Value>) -> Vec<(usize, &Value)> {
    map.iter()
        .filter_map(|(key, value)| match key.parse::<usize>() {
            Ok(index) if index.to_string() == *key => Some((index, value)),
            Ok(_) => {
                log::debug!("Feed: skipping non-canonical key '{}'", key);
                None
            }
            Err(_) => {
                log::debug!("Feed: skipping non-numeric key '{}'", key);
                None
            }
        })
        .collect()
}

fn parse_body(index: usize, obj: &Map<String, Value>) -> Result<FeedBody, FeedError> {
    let name = match obj.get("name") {
        None | Some(Value::Null) => return Err(FeedError::MissingField { index, field: "name" }),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(_) => {
            return Err(FeedError::InvalidField {
                index,
                field: "name",
                message: "must be a non-empty string".to_string(),
            })
        }
    };

    let full_degree = match obj.get("fullDegree") {
        None | Some(Value::Null) => {
            return Err(FeedError::MissingField {
                index,
                field: "fullDegree",
            })
        }
        Some(v) => number_field(v).ok_or_else(|| FeedError::InvalidField {
            index,
            field: "fullDegree",
            message: format!("expected a number, got {}", json_type_name(v)),
        })?,
    };
    let full_degree = normalize_degrees(full_degree);

    let norm_degree = obj
        .get("normDegree")
        .and_then(number_field)
        .filter(|d| (0.0..30.0).contains(d))
        .unwrap_or(full_degree % 30.0);

    let speed = obj.get("speed").and_then(number_field).unwrap_or(0.0);
    let is_retro = obj.get("isRetro").map(retro_flag).unwrap_or(false);
    let current_sign = obj.get("current_sign").and_then(integer_field);
    let house_number = obj
        .get("house_number")
        .and_then(integer_field)
        .filter(|h| (1..=12).contains(h))
        .map(|h| h as u8)
        .unwrap_or(0);
    let sign_lord = obj
        .get("sign_lord")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(FeedBody {
        index,
        name,
        full_degree,
        norm_degree,
        speed,
        is_retro,
        current_sign,
        house_number,
        sign_lord,
    })
}

fn number_field(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn integer_field(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn retro_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
