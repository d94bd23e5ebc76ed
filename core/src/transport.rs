//! Blocking `ureq` transport that completes on a worker thread.
//!
//! # Design
//! Each `send` moves the request onto a fresh thread, executes it with a
//! shared `ureq::Agent`, and resolves the `Completion` from there. The agent
//! is built with `http_status_as_error(false)` so 4xx/5xx responses reach the
//! pipeline as data; status interpretation belongs to `ensure_success`.
//! A request body is sent for every method, bodiless ones included.

use bytes::Bytes;
use ureq::typestate::{WithBody, WithoutBody};

use crate::config::ClientConfig;
use crate::http::{Completion, HttpRequest, Transport};
use crate::request::HttpMethod;
use crate::response::ResponseMeta;

#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout())
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest, completion: Completion) {
        let agent = self.agent.clone();
        std::thread::spawn(move || match execute(&agent, &request) {
            Ok((meta, body)) => completion.succeed(meta, body),
            Err(err) => completion.fail(err),
        });
    }
}

fn execute(
    agent: &ureq::Agent,
    request: &HttpRequest,
) -> Result<(ResponseMeta, Option<Bytes>), ureq::Error> {
    let url = request.url.as_str();
    let headers = &request.headers;
    let payload = request.body.as_deref();

    let mut response = match request.method {
        HttpMethod::Get => send_bodiless(agent.get(url), headers, payload),
        HttpMethod::Head => send_bodiless(agent.head(url), headers, payload),
        HttpMethod::Delete => send_bodiless(agent.delete(url), headers, payload),
        HttpMethod::Post => send_with_body(agent.post(url), headers, payload),
        HttpMethod::Put => send_with_body(agent.put(url), headers, payload),
        HttpMethod::Patch => send_with_body(agent.patch(url), headers, payload),
    }?;

    let meta = ResponseMeta {
        status: response.status().as_u16(),
        headers: response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect(),
    };

    let body = if request.method == HttpMethod::Head {
        None
    } else {
        Some(Bytes::from(response.body_mut().read_to_vec()?))
    };
    Ok((meta, body))
}

fn send_bodiless(
    builder: ureq::RequestBuilder<WithoutBody>,
    headers: &[(String, String)],
    payload: Option<&[u8]>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    let builder = with_headers(builder, headers);
    match payload {
        Some(payload) => builder.force_send_body().send(payload),
        None => builder.call(),
    }
}

fn send_with_body(
    builder: ureq::RequestBuilder<WithBody>,
    headers: &[(String, String)],
    payload: Option<&[u8]>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    let builder = with_headers(builder, headers);
    match payload {
        Some(payload) => builder.send(payload),
        None => builder.send_empty(),
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
