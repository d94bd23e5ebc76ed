//! Turns a `Request` into a URL string, a parsed `Url`, or a wire-ready
//! `HttpRequest`.
//!
//! # Design
//! All functions here are pure. Host and path are joined with exactly one
//! slash between them: one trailing `/` is trimmed from the host and one
//! leading `/` is ensured on a non-empty path. An empty path contributes
//! nothing, so `http://test.com` stays without a trailing slash in the
//! rendered string. Query keys and values are form-urlencoded, so reserved
//! characters in a value stay inside that value. Parsing through `url::Url`
//! is the only validation step.

use url::{form_urlencoded, Url};

use crate::error::Error;
use crate::http::HttpRequest;
use crate::request::Request;

impl Request {
    /// Render the request as `scheme://host/path?k=v&...` without validating it.
    pub fn url_string(&self) -> String {
        let mut url = format!(
            "{}://{}{}",
            self.scheme,
            trim_one_trailing_slash(&self.host),
            ensure_leading_slash(&self.path)
        );
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query_string());
        }
        url
    }

    /// Encoded `key=value` pairs joined by `&`, sorted by key.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(&value.to_string())))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parse the rendered string into a `Url`.
    pub fn to_url(&self) -> Result<Url, Error> {
        let url = self.url_string();
        Url::parse(&url).map_err(|source| Error::InvalidUrl { url, source })
    }

    /// Build the value handed to a `Transport`.
    pub fn to_http_request(&self) -> Result<HttpRequest, Error> {
        Ok(HttpRequest {
            method: self.method,
            url: self.to_url()?,
            headers: self.headers.clone(),
            body: self.body.clone(),
        })
    }
}

fn encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

fn trim_one_trailing_slash(host: &str) -> &str {
    host.strip_suffix('/').unwrap_or(host)
}

fn ensure_leading_slash(path: &str) -> String {
    if path.is_empty() || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RequestBuilder;
    use crate::request::{HttpMethod, Scheme};

    fn request(build: impl FnOnce(RequestBuilder<'_>) -> RequestBuilder<'_>) -> Request {
        let mut request = Request::new();
        build(RequestBuilder::new(&mut request));
        request
    }

    #[test]
    fn http_scheme() {
        let url = request(|b| b.http().host("test.com")).to_url().unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn https_scheme() {
        let url = request(|b| b.https().host("test.com")).to_url().unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn host_is_kept() {
        let url = request(|b| b.host("test.com")).to_url().unwrap();
        assert_eq!(url.host_str(), Some("test.com"));
    }

    #[test]
    fn trailing_slash_on_host_is_trimmed() {
        let req = request(|b| b.host("test.com/"));
        assert_eq!(req.url_string(), "http://test.com");
        assert_eq!(req.to_url().unwrap().host_str(), Some("test.com"));
    }

    #[test]
    fn only_one_trailing_slash_is_trimmed() {
        let req = request(|b| b.host("test.com//"));
        assert_eq!(req.url_string(), "http://test.com/");
    }

    #[test]
    fn path_is_kept() {
        let url = request(|b| b.host("test.com").path("/index.html"))
            .to_url()
            .unwrap();
        assert_eq!(url.path(), "/index.html");
    }

    #[test]
    fn slash_is_not_doubled_between_host_and_path() {
        let req = request(|b| b.host("test.com/").path("/index.html"));
        assert_eq!(req.url_string(), "http://test.com/index.html");
        assert_eq!(req.to_url().unwrap().path(), "/index.html");
    }

    #[test]
    fn missing_leading_slash_is_added() {
        let req = request(|b| b.host("test.com").path("index.html"));
        assert_eq!(req.url_string(), "http://test.com/index.html");
    }

    #[test]
    fn empty_path_adds_nothing() {
        let req = request(|b| b.host("test.com"));
        assert_eq!(req.url_string(), "http://test.com");
    }

    #[test]
    fn single_query_pair() {
        let url = request(|b| b.host("test").query([("test", 1)]))
            .to_url()
            .unwrap();
        assert_eq!(url.query(), Some("test=1"));
    }

    #[test]
    fn appended_query_pairs_are_all_present() {
        let url = request(|b| {
            b.host("test")
                .query([("test", 1)])
                .append_query([("test2", 2)])
        })
        .to_url()
        .unwrap();

        let query = url.query().unwrap();
        let pairs: Vec<&str> = query.split('&').collect();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&"test=1"));
        assert!(pairs.contains(&"test2=2"));
    }

    #[test]
    fn query_pairs_are_sorted_by_key() {
        let req = request(|b| b.host("test").query([("b", 2), ("a", 1), ("c", 3)]));
        assert_eq!(req.query_string(), "a=1&b=2&c=3");
    }

    #[test]
    fn float_and_text_query_values() {
        let req = request(|b| {
            b.host("test")
                .query([("ratio", 0.5)])
                .append_query([("name", "mango")])
        });
        assert_eq!(req.url_string(), "http://test?name=mango&ratio=0.5");
    }

    #[test]
    fn reserved_characters_stay_inside_their_value() {
        let req = request(|b| {
            b.host("test.com")
                .query([("q", "a#b"), ("r", "1&admin=true")])
        });
        assert_eq!(req.url_string(), "http://test.com?q=a%23b&r=1%26admin%3Dtrue");

        let url = req.to_url().unwrap();
        assert_eq!(url.fragment(), None);
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "a#b".to_string()),
                ("r".to_string(), "1&admin=true".to_string()),
            ]
        );
    }

    #[test]
    fn keys_and_spaces_are_encoded() {
        let req = request(|b| b.host("test").query([("full name", "a b")]));
        assert_eq!(req.query_string(), "full+name=a+b");
    }

    #[test]
    fn empty_host_is_invalid() {
        let err = request(|b| b).to_url().unwrap_err();
        match err {
            Error::InvalidUrl { url: rendered, source } => {
                assert_eq!(rendered, "http://");
                assert_eq!(source, url::ParseError::EmptyHost);
            }
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn illegal_host_characters_are_invalid() {
        let err = request(|b| b.host("bad host")).to_url().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn http_request_carries_method_and_headers() {
        let req = request(|b| {
            b.scheme(Scheme::Secure)
                .host("api.example.com")
                .path("items")
                .method(HttpMethod::Delete)
                .header("x-trace", "1")
                .body("gone")
        });
        let http = req.to_http_request().unwrap();
        assert_eq!(http.method, HttpMethod::Delete);
        assert_eq!(http.url.as_str(), "https://api.example.com/items");
        assert_eq!(http.headers, vec![("x-trace".to_string(), "1".to_string())]);
        assert_eq!(http.body.as_deref(), Some(&b"gone"[..]));
    }
}
