//! Response model handed to a `Pipeline`.

use bytes::Bytes;

/// Status line and headers reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseMeta {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

impl ResponseMeta {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One response as seen by the pipeline. `meta` is `None` when no transport
/// metadata exists, e.g. a response assembled by hand in a test.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    meta: Option<ResponseMeta>,
    body: Option<Bytes>,
}

impl Response {
    pub fn new(meta: Option<ResponseMeta>, body: Option<Bytes>) -> Self {
        Self { meta, body }
    }

    pub fn from_body(body: impl Into<Bytes>) -> Self {
        Self::new(None, Some(body.into()))
    }

    pub fn meta(&self) -> Option<&ResponseMeta> {
        self.meta.as_ref()
    }

    pub fn status(&self) -> Option<u16> {
        self.meta.as_ref().map(|m| m.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.header(name))
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub fn into_body(self) -> Option<Bytes> {
        self.body
    }

    pub fn into_parts(self) -> (Option<ResponseMeta>, Option<Bytes>) {
        (self.meta, self.body)
    }
}
