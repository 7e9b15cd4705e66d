//! Offset/limit paging over list endpoints.
//!
//! A request either asks for one page (`Limit::Count`) or for everything
//! (`Limit::All`), in which case pages of the maximum size are fetched until the
//! response no longer carries a `pagination.next` link and the items under the
//! response's data key are merged into a single document.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::ValidationError;

const META_KEYS: [&str; 2] = ["pagination", "request"];

/// How many records a list call should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Count(u16),
    All,
}

impl FromStr for Limit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse::<u16>().map(Self::Count).map_err(|_| ValidationError::Limit {
            given: s.to_string(),
            max: crate::config::MAX_LIMIT,
        })
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::All => f.write_str("all"),
        }
    }
}

/// Ordered query string parameters. Absent optional values are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any earlier value.
    pub fn set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    pub fn set_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.set(key, v);
        }
        self
    }

    /// Timestamps go over the wire as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn set_datetime(&mut self, key: &str, value: Option<DateTime<Utc>>) -> &mut Self {
        self.set_opt(key, value.map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ")))
    }

    pub fn set_flag(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        self.set_opt(key, value)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(idx).1)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The first top-level key, in document order, that is not paging or request
/// metadata.
pub fn data_key(page: &Value) -> Result<String, ValidationError> {
    page.as_object()
        .and_then(|obj| obj.keys().find(|k| !META_KEYS.contains(&k.as_str())))
        .cloned()
        .ok_or(ValidationError::DataKey)
}

pub fn has_next(page: &Value) -> bool {
    page.get("pagination")
        .and_then(|p| p.get("next"))
        .is_some_and(|next| !next.is_null())
}

pub fn total_count(page: &Value) -> Option<u64> {
    page.get("pagination")?.get("count")?.as_u64()
}

/// Number of records a page contributed under `key`.
///
/// Object-valued data (bill subjects) counts the records of its array fields.
pub fn page_len(page: &Value, key: &str) -> usize {
    match page.get(key) {
        Some(Value::Array(items)) => items.len(),
        Some(Value::Object(fields)) => fields
            .values()
            .filter_map(Value::as_array)
            .map(Vec::len)
            .sum(),
        _ => 0,
    }
}

/// Append the records of `next` into `acc`.
pub fn merge_data(acc: &mut Value, next: Value) {
    match (acc, next) {
        (Value::Array(items), Value::Array(more)) => items.extend(more),
        (Value::Object(fields), Value::Object(more)) => merge_fields(fields, more),
        (slot @ Value::Null, other) => *slot = other,
        _ => {}
    }
}

fn merge_fields(fields: &mut Map<String, Value>, more: Map<String, Value>) {
    for (name, value) in more {
        match (fields.get_mut(&name), value) {
            (Some(Value::Array(items)), Value::Array(extra)) => items.extend(extra),
            (Some(_), _) => {}
            (None, value) => {
                fields.insert(name, value);
            }
        }
    }
}
