//! Connection options consumed by the URI builder

use super::constants::{DEFAULT_HOST, DEFAULT_PORT};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Connection options
///
/// Every field is optional. Empty strings and a zero port are treated the
/// same as missing values and replaced by defaults when formatting.
/// Use `ConnectionOptions::builder()` for fluent construction.
///
/// Deserializing goes through `ConnectionOptions::from_value`, so serde
/// input gets the same defaulting rules as untyped JSON. A non-array host
/// list surfaces as a custom serde error carrying the invalid argument
/// message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct ConnectionOptions {
    /// Username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password (ignored without a username)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Ordered host list (empty = single default host)
    #[serde(rename = "hosts", skip_serializing_if = "Vec::is_empty")]
    pub host_entries: Vec<HostEntry>,
    /// Database name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Ordered query options, duplicates preserved
    #[serde(rename = "options", skip_serializing_if = "Vec::is_empty")]
    pub query_options: Vec<QueryOption>,
}

impl ConnectionOptions {
    /// Create a builder for fluent configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use mongodb_uri_builder::ConnectionOptions;
    ///
    /// let opts = ConnectionOptions::builder()
    ///     .username("app")
    ///     .host("mongo1", 27017)
    ///     .database("inventory")
    ///     .build();
    /// assert_eq!(opts.host_entries.len(), 1);
    /// ```
    pub fn builder() -> ConnectionOptionsBuilder {
        ConnectionOptionsBuilder::default()
    }

    /// Username, if present and non-empty
    pub fn username(&self) -> Option<&str> {
        filled(&self.username)
    }

    /// Password, if present and non-empty
    pub fn password(&self) -> Option<&str> {
        filled(&self.password)
    }

    /// Database name, if present and non-empty
    pub fn database(&self) -> Option<&str> {
        filled(&self.database)
    }
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Builder for `ConnectionOptions`
#[derive(Debug, Clone, Default)]
pub struct ConnectionOptionsBuilder {
    username: Option<String>,
    password: Option<String>,
    host_entries: Vec<HostEntry>,
    database: Option<String>,
    query_options: Vec<QueryOption>,
}

impl ConnectionOptionsBuilder {
    /// Set the username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Append a host with an explicit port
    pub fn host(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host_entries.push(HostEntry::new(host, port));
        self
    }

    /// Append a host entry as-is (fields may be missing)
    pub fn host_entry(mut self, entry: HostEntry) -> Self {
        self.host_entries.push(entry);
        self
    }

    /// Set the database name
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Append a query option
    ///
    /// Options keep insertion order; repeating a key appends another pair.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_options.push(QueryOption::new(key, value));
        self
    }

    /// Build the options
    pub fn build(self) -> ConnectionOptions {
        ConnectionOptions {
            username: self.username,
            password: self.password,
            host_entries: self.host_entries,
            database: self.database,
            query_options: self.query_options,
        }
    }
}

/// Port of a host entry
///
/// Untyped input may carry ports that are not valid `u16` values; those
/// are kept as text and emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Port {
    /// Numeric port
    Number(u16),
    /// Port text taken as-is from untyped input
    Text(String),
}

impl Port {
    /// Whether this port counts as absent (zero or empty text)
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Number(port) => *port == 0,
            Self::Text(text) => text.is_empty(),
        }
    }
}

impl From<u16> for Port {
    fn from(port: u16) -> Self {
        Self::Number(port)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(port) => write!(f, "{}", port),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One `host:port` entry of the host list
///
/// Deserializing uses the same loose rules as untyped input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct HostEntry {
    /// Hostname (missing or empty = `localhost`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Port (missing, zero or empty = 27017)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<Port>,
}

impl HostEntry {
    /// Create an entry with both fields set
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(Port::Number(port)),
        }
    }

    /// Create an entry with only a hostname (default port)
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            port: None,
        }
    }

    /// Hostname, if present and non-empty
    pub fn host(&self) -> Option<&str> {
        filled(&self.host)
    }

    /// Port, if present and not unset
    pub fn port(&self) -> Option<&Port> {
        self.port.as_ref().filter(|port| !port.is_unset())
    }

    /// Hostname with default substitution applied
    pub fn host_or_default(&self) -> &str {
        self.host().unwrap_or(DEFAULT_HOST)
    }

    /// Whether formatting this entry substitutes any default
    pub fn uses_defaults(&self) -> bool {
        self.host().is_none() || self.port().is_none()
    }
}

impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port() {
            Some(port) => write!(f, "{}:{}", self.host_or_default(), port),
            None => write!(f, "{}:{}", self.host_or_default(), DEFAULT_PORT),
        }
    }
}

/// A single `key=value` query option
///
/// Serialized as a one-entry map, e.g. `{"replicaSet": "rs0"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOption {
    /// Option name
    pub key: String,
    /// Option value (emitted verbatim)
    pub value: String,
}

impl QueryOption {
    /// Create a new option
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for QueryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl Serialize for QueryOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for QueryOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QueryOptionVisitor;

        impl<'de> Visitor<'de> for QueryOptionVisitor {
            type Value = QueryOption;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with a single option entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<QueryOption, A::Error> {
                let (key, value): (String, String) = map
                    .next_entry()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;

                // Only the first entry counts
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}

                Ok(QueryOption { key, value })
            }
        }

        deserializer.deserialize_map(QueryOptionVisitor)
    }
}
