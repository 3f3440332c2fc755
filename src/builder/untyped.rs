//! Decoding options from untyped JSON input
//!
//! Untyped input follows loose rules. Host and port fields that are
//! missing, `null`, `false`, `0` or `""` fall back to defaults; any other
//! value is emitted as its text, without range or type checks. The one
//! hard failure is a host list that is present but not an array.

use super::fragments::build;
use super::options::{ConnectionOptions, HostEntry, Port, QueryOption};
use crate::{Error, Result};
use serde_json::{Map, Value};

const HOSTS_KEYS: &[&str] = &["hosts", "hostEntries"];
const OPTIONS_KEYS: &[&str] = &["options", "queryOptions"];

impl ConnectionOptions {
    /// Decode options from an untyped JSON value
    ///
    /// `null` and other non-object values decode to empty options.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the host list is present but
    /// is not an array.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(obj) = value.as_object() else {
            return Ok(Self::default());
        };

        Ok(Self {
            username: string_field(obj, "username"),
            password: string_field(obj, "password"),
            host_entries: decode_hosts(obj)?,
            database: string_field(obj, "database"),
            query_options: decode_options(obj),
        })
    }

    /// Parse options from JSON text
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` on malformed text, `Error::Config` if the
    /// document is not an object, and `Error::InvalidArgument` for a
    /// non-array host list.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        if !value.is_object() {
            return Err(Error::Config(
                "connection options must be a JSON object".into(),
            ));
        }
        Self::from_value(&value)
    }
}

impl TryFrom<Value> for ConnectionOptions {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

impl From<Value> for HostEntry {
    fn from(value: Value) -> Self {
        decode_host(&value)
    }
}

/// Build a connection string from an untyped JSON value
pub fn build_from_value(value: &Value) -> Result<String> {
    let opts = ConnectionOptions::from_value(value).map_err(record_error)?;
    Ok(build(&opts))
}

/// Build a connection string from JSON text
///
/// # Examples
///
/// ```
/// let uri = mongodb_uri_builder::build_from_json(
///     r#"{"hosts": [{"host": "mongo1", "port": 123}], "database": "app"}"#,
/// )?;
/// assert_eq!(uri, "mongodb://mongo1:123/app");
/// # Ok::<(), mongodb_uri_builder::Error>(())
/// ```
pub fn build_from_json(s: &str) -> Result<String> {
    let opts = ConnectionOptions::from_json_str(s).map_err(record_error)?;
    Ok(build(&opts))
}

fn record_error(err: Error) -> Error {
    crate::metrics::counters::error_raised(err.category());
    err
}

fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn decode_hosts(obj: &Map<String, Value>) -> Result<Vec<HostEntry>> {
    let Some(value) = lookup(obj, HOSTS_KEYS) else {
        return Ok(Vec::new());
    };

    let Some(entries) = value.as_array() else {
        tracing::debug!(kind = value_kind(value), "rejecting non-array host list");
        return Err(Error::invalid_argument("hosts must be an array"));
    };

    Ok(entries.iter().map(decode_host).collect())
}

fn decode_host(value: &Value) -> HostEntry {
    let Some(obj) = value.as_object() else {
        return HostEntry::default();
    };

    HostEntry {
        host: obj.get("host").and_then(truthy_text),
        port: obj.get("port").and_then(decode_port),
    }
}

fn decode_port(value: &Value) -> Option<Port> {
    if let Some(port) = value.as_u64().and_then(|p| u16::try_from(p).ok()) {
        return Some(port).filter(|p| *p != 0).map(Port::Number);
    }
    truthy_text(value).map(Port::Text)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    (!is_falsy(value)).then(|| scalar_text(value))
}

fn decode_options(obj: &Map<String, Value>) -> Vec<QueryOption> {
    let Some(entries) = lookup(obj, OPTIONS_KEYS).and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|option| option.iter().next())
        .map(|(key, value)| QueryOption::new(key.as_str(), scalar_text(value)))
        .collect()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
