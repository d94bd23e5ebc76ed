//! Declarative HTTP requests with a typed response pipeline.
//!
//! # Overview
//! An `Endpoint` pairs a `Request`, filled in through a fluent
//! `RequestBuilder`, with a `Pipeline` that turns the raw `Response` into the
//! caller's type. A `Client` serializes the request, hands it to a pluggable
//! `Transport`, and runs the pipeline once the transport completes.
//!
//! # Design
//! - The core never does I/O itself; transports implement one method and
//!   report through a one-shot `Completion`.
//! - Pipelines are built once and consumed by their single invocation. Stage
//!   errors keep the caller's own error type.
//! - Every `Client::send` resolves its callback exactly once, including on
//!   serialization failure, transport failure and abandoned transports.
//! - `UreqTransport` (feature `ureq`, on by default) is a ready-made blocking
//!   transport that completes on a worker thread.

pub mod builder;
pub mod client;
pub mod config;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod request;
pub mod response;
mod serializer;
#[cfg(feature = "ureq")]
pub mod transport;

pub use builder::RequestBuilder;
pub use client::Client;
pub use config::ClientConfig;
pub use decode::{Decoder, Json};
pub use endpoint::Endpoint;
pub use error::{BoxError, Error};
pub use http::{Completion, HttpRequest, Transport};
pub use pipeline::Pipeline;
pub use request::{HttpMethod, QueryValue, Request, Scheme};
pub use response::{Response, ResponseMeta};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
