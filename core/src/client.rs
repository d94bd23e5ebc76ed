//! Dispatches an `Endpoint` through a `Transport` and resolves its pipeline.
//!
//! # Design
//! `Client` owns no network code: it serializes the request, applies the
//! configured default headers, and hands the result to its `Transport` along
//! with a `Completion` that runs the endpoint's pipeline. Every path through
//! `send` ends in exactly one call to the caller's callback:
//!
//! - serialization failure: `Error::InvalidUrl`, before the transport is touched;
//! - transport failure: `Error::TransportFailed`;
//! - response without a body: `Error::EmptyBody`;
//! - transport dropped the completion: `Error::Abandoned`;
//! - otherwise: whatever the pipeline returns.

use std::sync::mpsc;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::http::{Completion, HttpRequest, Transport};
use crate::request::Request;

/// Sends endpoints through a transport `T`.
#[derive(Debug, Clone)]
pub struct Client<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send `endpoint` and deliver its outcome to `on_result` exactly once.
    ///
    /// `on_result` runs on whichever thread the transport completes on, or
    /// inline when the request fails to serialize.
    pub fn send<U, E, F>(&self, endpoint: Endpoint<U, E>, on_result: F)
    where
        U: 'static,
        E: From<Error> + 'static,
        F: FnOnce(Result<U, E>) + Send + 'static,
    {
        let (request, pipeline) = endpoint.into_parts();
        let http_request = match self.prepare(&request) {
            Ok(http_request) => http_request,
            Err(err) => {
                tracing::warn!(error = %err, "request did not serialize");
                on_result(Err(err.into()));
                return;
            }
        };

        let url = http_request.url.clone();
        tracing::debug!(method = %http_request.method, %url, "dispatching request");

        let completion = Completion::new(move |outcome| {
            let result = match outcome {
                Ok(response) if response.body().is_some() => {
                    tracing::debug!(%url, status = ?response.status(), "running response pipeline");
                    pipeline.run(response)
                }
                Ok(response) => {
                    tracing::debug!(%url, status = ?response.status(), "response carried no body");
                    Err(Error::EmptyBody.into())
                }
                Err(err) => {
                    tracing::warn!(%url, kind = err.kind(), error = %err, "request failed");
                    Err(err.into())
                }
            };
            on_result(result);
        });

        self.transport.send(http_request, completion);
    }

    /// Send `endpoint` and block the current thread until it resolves.
    pub fn send_blocking<U, E>(&self, endpoint: Endpoint<U, E>) -> Result<U, E>
    where
        U: Send + 'static,
        E: From<Error> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        self.send(endpoint, move |result| {
            // The receiver only goes away if this thread panicked.
            let _ = tx.send(result);
        });
        rx.recv().unwrap_or_else(|_| Err(Error::Abandoned.into()))
    }

    /// Serialize `request` and fill in configured headers it does not set.
    fn prepare(&self, request: &Request) -> Result<HttpRequest, Error> {
        let mut http_request = request.to_http_request()?;

        let mut defaults: Vec<(String, String)> = self
            .config
            .default_headers
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        if !self.config.user_agent.is_empty() {
            defaults.push(("user-agent".to_string(), self.config.user_agent.clone()));
        }

        for (name, value) in defaults {
            if http_request.header(&name).is_none() {
                http_request.headers.push((name, value));
            }
        }
        Ok(http_request)
    }
}
