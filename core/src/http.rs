//! Transport boundary: the serialized request, the `Transport` trait and the
//! one-shot `Completion` a transport reports through.
//!
//! # Design
//! The core never touches the network. A `Transport` receives an
//! `HttpRequest` plus a `Completion` and must resolve the completion once,
//! from any thread. `succeed` and `fail` consume the handle, so a second
//! report cannot compile; a handle dropped without either resolves the call
//! as `Error::Abandoned` so the caller is never left waiting on a transport
//! that gave up.

use bytes::Bytes;
use url::Url;

use crate::error::{BoxError, Error};
use crate::request::HttpMethod;
use crate::response::{Response, ResponseMeta};

/// A fully serialized request, ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Executes an `HttpRequest` and reports through `completion`.
pub trait Transport {
    fn send(&self, request: HttpRequest, completion: Completion);
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest, completion: Completion) {
        (**self).send(request, completion)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn send(&self, request: HttpRequest, completion: Completion) {
        (**self).send(request, completion)
    }
}

type Deliver = Box<dyn FnOnce(Result<Response, Error>) + Send>;

/// One-shot handle a transport resolves with the outcome of a request.
pub struct Completion {
    deliver: Option<Deliver>,
}

impl Completion {
    pub fn new(deliver: impl FnOnce(Result<Response, Error>) + Send + 'static) -> Self {
        Self {
            deliver: Some(Box::new(deliver)),
        }
    }

    /// Report a response. `body` is `None` when the transport got no payload.
    pub fn succeed(mut self, meta: ResponseMeta, body: Option<Bytes>) {
        self.resolve(Ok(Response::new(Some(meta), body)));
    }

    /// Report a transport-level failure.
    pub fn fail(mut self, error: impl Into<BoxError>) {
        self.resolve(Err(Error::TransportFailed(error.into())));
    }

    fn resolve(&mut self, outcome: Result<Response, Error>) {
        if let Some(deliver) = self.deliver.take() {
            deliver(outcome);
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if self.deliver.is_some() {
            tracing::warn!("transport dropped its completion without reporting");
            self.resolve(Err(Error::Abandoned));
        }
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("resolved", &self.deliver.is_none())
            .finish()
    }
}
