//! Query string and delimited-list helpers.

use std::{collections::BTreeMap, fmt::Display};

use log::warn;

#[derive(uniffi::Enum, Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Number(f64),
}

impl QueryValue {
    /// Empty strings, NaN and infinities carry nothing worth sending. Zero does.
    fn is_present(&self) -> bool {
        match self {
            QueryValue::Text(text) => !text.is_empty(),
            QueryValue::Number(number) => number.is_finite(),
        }
    }
}

/// Numbers print with Rust's float formatting: no exponent, so `1e21` is
/// written out in full.
impl std::fmt::Display for QueryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryValue::Text(text) => f.write_str(text),
            QueryValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Number(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Number(value as f64)
    }
}

#[derive(uniffi::Record, Debug, Clone, PartialEq)]
pub struct QueryParam {
    pub key: String,
    pub value: Option<QueryValue>,
}

impl QueryParam {
    pub fn new(key: impl Into<String>, value: Option<impl Into<QueryValue>>) -> Self {
        Self {
            key: key.into(),
            value: value.map(Into::into),
        }
    }
}

/// Builds `?a=1&b=2` from the params that carry a value, in the order given.
/// Returns an empty string when none do.
///
/// Keys and values are form-urlencoded here. Pass raw values: anything already
/// percent-encoded is encoded a second time (`%2C` becomes `%252C`).
pub fn query_from_params(params: &[QueryParam]) -> String {
    let pairs = params
        .iter()
        .filter_map(|param| match &param.value {
            Some(value) if value.is_present() => Some((param.key.as_str(), value.to_string())),
            _ => None,
        })
        .collect::<Vec<_>>();

    if pairs.is_empty() {
        return String::new();
    }

    match serde_urlencoded::to_string(&pairs) {
        Ok(query) => format!("?{query}"),
        Err(e) => {
            // string pairs always encode, this is unreachable in practice
            warn!("Failed to encode query params: {e}");
            String::new()
        }
    }
}

/// Same as [query_from_params] with the keys in sorted order, so equal maps
/// always produce the same string.
pub fn query_from_map(params: &BTreeMap<String, Option<QueryValue>>) -> String {
    let params = params
        .iter()
        .map(|(key, value)| QueryParam {
            key: key.clone(),
            value: value.clone(),
        })
        .collect::<Vec<_>>();
    query_from_params(&params)
}

pub fn join_values<T: Display>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Strips every space, then splits on `separator` and drops empty pieces.
pub fn split_values(input: &str, separator: &str) -> Vec<String> {
    input
        .replace(' ', "")
        .split(separator)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}
