//! Fluent mutator over a single in-progress `Request`.
//!
//! # Design
//! `RequestBuilder` holds `&mut Request` rather than owning a copy, so every
//! call in a chain accumulates onto the same value and the borrow checker
//! rules out sharing one builder between threads. No method fails: a bad
//! host or path only shows up when the request is serialized.

use bytes::Bytes;

use crate::request::{HttpMethod, QueryValue, Request, Scheme};

/// Chained setters over a borrowed `Request`.
#[derive(Debug)]
pub struct RequestBuilder<'a> {
    request: &'a mut Request,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(request: &'a mut Request) -> Self {
        Self { request }
    }

    pub fn scheme(self, scheme: Scheme) -> Self {
        self.request.scheme = scheme;
        self
    }

    pub fn http(self) -> Self {
        self.scheme(Scheme::Plain)
    }

    pub fn https(self) -> Self {
        self.scheme(Scheme::Secure)
    }

    pub fn host(self, host: impl Into<String>) -> Self {
        self.request.host = host.into();
        self
    }

    pub fn path(self, path: impl Into<String>) -> Self {
        self.request.path = path.into();
        self
    }

    /// Replace the whole query map.
    pub fn query<I, K, V>(self, query: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<QueryValue>,
    {
        self.request.query = query
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Merge entries into the existing query map. Later values win on
    /// duplicate keys.
    pub fn append_query<I, K, V>(self, query: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<QueryValue>,
    {
        for (k, v) in query {
            self.request.query.insert(k.into(), v.into());
        }
        self
    }

    pub fn method(self, method: HttpMethod) -> Self {
        self.request.method = method;
        self
    }

    /// Append a header. Repeated names are kept in order.
    pub fn header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.push((name.into(), value.into()));
        self
    }

    /// Set the payload sent with the request.
    pub fn body(self, body: impl Into<Bytes>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Read back the request built so far.
    pub fn request(&self) -> &Request {
        self.request
    }
}
