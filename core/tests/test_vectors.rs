//! Verify request serialization against JSON test vectors stored in `test-vectors/`.
//!
//! Each case describes a request, the exact rendered URL string, and either
//! the parsed URL components or the expected error.

use route_core::{Error, QueryValue, Request, RequestBuilder, Scheme};

/// Parse the scheme string from test vectors into `Scheme`.
fn parse_scheme(s: &str) -> Scheme {
    match s {
        "http" => Scheme::Plain,
        "https" => Scheme::Secure,
        other => panic!("unknown scheme: {other}"),
    }
}

/// Map a JSON scalar onto the matching `QueryValue` variant.
fn query_value(value: &serde_json::Value) -> QueryValue {
    if let Some(n) = value.as_i64() {
        QueryValue::Int(n)
    } else if let Some(x) = value.as_f64() {
        QueryValue::Float(x)
    } else if let Some(s) = value.as_str() {
        QueryValue::Text(s.to_string())
    } else {
        panic!("unsupported query value: {value}")
    }
}

fn build_request(spec: &serde_json::Value) -> Request {
    let query: Vec<(String, QueryValue)> = spec["query"]
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, v)| (k.clone(), query_value(v)))
        .collect();

    let mut request = Request::new();
    RequestBuilder::new(&mut request)
        .scheme(parse_scheme(spec["scheme"].as_str().unwrap()))
        .host(spec["host"].as_str().unwrap())
        .path(spec["path"].as_str().unwrap())
        .query(query);
    request
}

#[test]
fn url_test_vectors() {
    let raw = include_str!("../../test-vectors/url.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let request = build_request(&case["request"]);

        assert_eq!(
            request.url_string(),
            case["expected_url"].as_str().unwrap(),
            "{name}: rendered url"
        );

        let result = request.to_url();

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "InvalidUrl" => assert!(
                    matches!(err, Error::InvalidUrl { .. }),
                    "{name}: expected InvalidUrl, got {err:?}"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let url = result.unwrap();
            let expected = &case["expected_parsed"];
            assert_eq!(url.scheme(), expected["scheme"].as_str().unwrap(), "{name}: scheme");
            assert_eq!(url.host_str(), expected["host"].as_str(), "{name}: host");
            assert_eq!(url.path(), expected["path"].as_str().unwrap(), "{name}: path");
            assert_eq!(url.query(), expected["query"].as_str(), "{name}: query");
            if let Some(fragment) = expected.get("fragment") {
                assert_eq!(url.fragment(), fragment.as_str(), "{name}: fragment");
            }
            if let Some(pairs) = expected.get("pairs") {
                let expected_pairs: Vec<(String, String)> = pairs
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|pair| {
                        (
                            pair[0].as_str().unwrap().to_string(),
                            pair[1].as_str().unwrap().to_string(),
                        )
                    })
                    .collect();
                let actual: Vec<(String, String)> = url.query_pairs().into_owned().collect();
                assert_eq!(actual, expected_pairs, "{name}: query pairs");
            }
        }
    }
}
