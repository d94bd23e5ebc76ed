//! Typed, fail-fast transformation from a `Response` to a caller's value.
//!
//! # Design
//! A `Pipeline<T, E>` is a boxed `FnOnce(Response) -> Result<T, E>`. Every
//! combinator moves the current box into a new closure that runs it first
//! and only feeds its output onward on `Ok`, so stages execute left to right,
//! each at most once, and nothing runs after the first `Err`. `run` consumes
//! the pipeline, which is what makes "invoked once per response" a type-level
//! fact rather than a convention.
//!
//! `E` is the caller's error type and passes through untouched. Failures the
//! built-in stages raise (`EmptyBody`, `ValidationFailed`, ...) reach `E`
//! through `E: From<Error>`; the default `E = Error` needs no conversion.

use std::fmt;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::decode::{Decoder, Json};
use crate::error::Error;
use crate::response::Response;

type Stage<T, E> = Box<dyn FnOnce(Response) -> Result<T, E> + Send>;

/// A composed chain of stages from `Response` to `T`.
pub struct Pipeline<T, E = Error> {
    stage: Stage<T, E>,
}

impl<E: 'static> Pipeline<Response, E> {
    /// The identity pipeline: yields the response unchanged.
    pub fn new() -> Self {
        Self {
            stage: Box::new(Ok::<Response, E>),
        }
    }
}

impl<E: 'static> Default for Pipeline<Response, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static, E: 'static> Pipeline<T, E> {
    /// Append a fallible stage. `f` only runs if every earlier stage succeeded.
    pub fn chain<U, F>(self, f: F) -> Pipeline<U, E>
    where
        F: FnOnce(T) -> Result<U, E> + Send + 'static,
    {
        let previous = self.stage;
        Pipeline {
            stage: Box::new(move |response: Response| previous(response).and_then(f)),
        }
    }

    /// Append an infallible stage.
    pub fn map<U, F>(self, f: F) -> Pipeline<U, E>
    where
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.chain(move |value| Ok(f(value)))
    }

    /// Pass the value through if `predicate` holds, else fail with
    /// `Error::ValidationFailed`.
    pub fn validate<P>(self, predicate: P) -> Pipeline<T, E>
    where
        P: FnOnce(&T) -> bool + Send + 'static,
        E: From<Error>,
    {
        self.validate_with("predicate rejected the value", predicate)
    }

    /// Like `validate`, with `reason` carried in the failure.
    pub fn validate_with<P>(self, reason: impl Into<String>, predicate: P) -> Pipeline<T, E>
    where
        P: FnOnce(&T) -> bool + Send + 'static,
        E: From<Error>,
    {
        let reason = reason.into();
        self.chain(move |value| {
            if predicate(&value) {
                Ok(value)
            } else {
                Err(Error::ValidationFailed(reason).into())
            }
        })
    }

    /// Invoke every stage against `response`, consuming the pipeline.
    pub fn run(self, response: Response) -> Result<T, E> {
        (self.stage)(response)
    }
}

impl<E: From<Error> + 'static> Pipeline<Response, E> {
    /// Fail with `Error::HttpStatus` unless the response reports a 2xx status.
    /// Responses without transport metadata pass through.
    pub fn ensure_success(self) -> Pipeline<Response, E> {
        self.chain(|response| {
            let rejected = response
                .meta()
                .filter(|meta| !meta.is_success())
                .map(|meta| meta.status);
            match rejected {
                Some(status) => Err(Error::HttpStatus {
                    status,
                    body: response.into_body(),
                }
                .into()),
                None => Ok(response),
            }
        })
    }

    /// The raw body, or `Error::EmptyBody` if there is none.
    pub fn bytes(self) -> Pipeline<Bytes, E> {
        self.chain(|response| response.into_body().ok_or_else(|| Error::EmptyBody.into()))
    }

    /// The body as UTF-8 text.
    pub fn text(self) -> Pipeline<String, E> {
        self.bytes().chain(|body| {
            String::from_utf8(body.to_vec()).map_err(|e| Error::DecodeFailed(Box::new(e)).into())
        })
    }

    /// Decode the body as JSON into `U`.
    pub fn decode<U>(self) -> Pipeline<U, E>
    where
        U: DeserializeOwned + 'static,
    {
        self.decode_with(Json)
    }

    /// Decode the body into `U` with `decoder`. A missing body fails with
    /// `Error::EmptyBody`; a decoder error becomes `Error::DecodeFailed` with
    /// the decoder's error as its source.
    pub fn decode_with<U, D>(self, decoder: D) -> Pipeline<U, E>
    where
        U: 'static,
        D: Decoder<U> + Send + 'static,
    {
        self.bytes().chain(move |body| {
            decoder
                .decode(&body)
                .map_err(|e| Error::DecodeFailed(Box::new(e)).into())
        })
    }
}

impl<T, E> fmt::Debug for Pipeline<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("output", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
