//! Request model: the plain data a `RequestBuilder` fills in.
//!
//! # Design
//! `host` and `path` are stored exactly as given and are never validated
//! here; normalization and URL parsing happen only in the serializer. The
//! query is a `BTreeMap` so serialized pairs come out sorted by key, which
//! keeps URLs deterministic across runs.

use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;

/// URL scheme of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// `http`
    #[default]
    Plain,
    /// `https`
    Secure,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Plain => "http",
            Scheme::Secure => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single query parameter value.
///
/// The `Display` impl is the canonical form the serializer percent-encodes
/// into the URL: text verbatim, integers undecorated, floats via Rust's
/// default formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

// Values above i64::MAX keep their exact digits as text.
impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(QueryValue::Int)
            .unwrap_or_else(|_| QueryValue::Text(value.to_string()))
    }
}

impl From<usize> for QueryValue {
    fn from(value: usize) -> Self {
        QueryValue::from(value as u64)
    }
}

impl From<f32> for QueryValue {
    fn from(value: f32) -> Self {
        QueryValue::Float(f64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

/// An outbound request described as plain data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub scheme: Scheme,
    pub host: String,
    pub path: String,
    pub query: BTreeMap<String, QueryValue>,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }
}
