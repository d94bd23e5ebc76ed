//! An `Endpoint` pairs the request to send with the pipeline that will turn
//! its response into a `T`.

use crate::builder::RequestBuilder;
use crate::error::Error;
use crate::pipeline::Pipeline;
use crate::request::Request;
use crate::response::Response;

/// A configured call: what to request and how to read the answer.
///
/// ```
/// use route_core::Endpoint;
///
/// #[derive(serde::Deserialize)]
/// struct Item {
///     title: String,
/// }
///
/// let endpoint = Endpoint::new()
///     .request(|b| b.https().host("api.example.com").path("items/1"))
///     .response_chain(|p| p.ensure_success().decode::<Item>().map(|item| item.title));
/// assert_eq!(endpoint.as_request().url_string(), "https://api.example.com/items/1");
/// ```
#[derive(Debug)]
pub struct Endpoint<T, E = Error> {
    request: Request,
    pipeline: Pipeline<T, E>,
}

impl Endpoint<Response> {
    /// An endpoint with a default request and an identity pipeline.
    ///
    /// For a custom pipeline error type use
    /// `Endpoint::<Response, MyError>::default()`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: 'static> Default for Endpoint<Response, E> {
    fn default() -> Self {
        Self {
            request: Request::new(),
            pipeline: Pipeline::new(),
        }
    }
}

impl<T: 'static, E: 'static> Endpoint<T, E> {
    pub fn from_parts(request: Request, pipeline: Pipeline<T, E>) -> Self {
        Self { request, pipeline }
    }

    /// Configure the request through a builder over this endpoint's `Request`.
    pub fn request<F>(mut self, build: F) -> Self
    where
        F: FnOnce(RequestBuilder<'_>) -> RequestBuilder<'_>,
    {
        build(RequestBuilder::new(&mut self.request));
        self
    }

    /// Replace the pipeline with one built from the identity pipeline.
    pub fn response_chain<U, F>(self, build: F) -> Endpoint<U, E>
    where
        U: 'static,
        F: FnOnce(Pipeline<Response, E>) -> Pipeline<U, E>,
    {
        Endpoint {
            request: self.request,
            pipeline: build(Pipeline::new()),
        }
    }

    pub fn as_request(&self) -> &Request {
        &self.request
    }

    pub fn into_parts(self) -> (Request, Pipeline<T, E>) {
        (self.request, self.pipeline)
    }
}
