#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

//! Host-port encoding tests
//!
//! Table-driven cases from `tests/data/host_port_cases.json`, plus a
//! cross-check of IDN labels against the `url` crate.

use httplex::{EncodingError, encode_host_port, split_host_port};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum CaseEntry {
    Comment(String),
    Case(HostPortCase),
}

#[derive(Debug, Deserialize)]
struct HostPortCase {
    input: String,
    output: Option<String>,
}

fn load_cases() -> Vec<HostPortCase> {
    let data = include_str!("data/host_port_cases.json");
    let entries: Vec<CaseEntry> = serde_json::from_str(data).expect("valid test data");
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            CaseEntry::Comment(_) => None,
            CaseEntry::Case(case) => Some(case),
        })
        .collect()
}

#[test]
fn test_host_port_cases() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    for case in cases {
        let result = encode_host_port(&case.input);
        match case.output {
            Some(expected) => {
                let actual = result
                    .unwrap_or_else(|e| panic!("encode_host_port({:?}) failed: {e}", case.input));
                assert_eq!(actual, expected.as_str(), "input: {:?}", case.input);
            }
            None => assert!(result.is_err(), "expected failure for {:?}", case.input),
        }
    }
}

#[test]
fn test_encoded_output_is_stable() {
    for case in load_cases() {
        let Some(expected) = case.output else {
            continue;
        };
        let again = encode_host_port(&expected).unwrap();
        assert_eq!(again, expected.as_str());
    }
}

#[test]
fn test_matches_url_crate_host() {
    for host in ["bücher.de", "münchen.de", "гофер.рф", "日本.jp", "中国.cn", "ドメイン.テスト"] {
        let url = url::Url::parse(&format!("http://{host}:8080/")).unwrap();
        let expected = format!("{}:8080", url.host_str().unwrap());
        let input = format!("{host}:8080");
        let actual = encode_host_port(&input).unwrap();
        assert_eq!(actual, expected.as_str(), "host: {host}");
    }
}

#[test]
fn test_error_display() {
    let err = encode_host_port(&"ü".repeat(80)).unwrap_err();
    assert_eq!(err, EncodingError::LabelTooLong);
    assert_eq!(err.to_string(), "Host label too long");
    assert_eq!(EncodingError::InvalidLabel.to_string(), "Invalid host label");
}

#[test]
fn test_invalid_label_error() {
    let host = "\u{80}".repeat(5000) + "\u{10FFFF}";
    assert_eq!(encode_host_port(&host), Err(EncodingError::InvalidLabel));
    assert_eq!(
        encode_host_port(&format!("www.{host}:443")),
        Err(EncodingError::InvalidLabel)
    );
}

#[test]
fn test_stray_bracket_host_is_encoded() {
    assert_eq!(
        encode_host_port("bücher.de]:80").unwrap(),
        "xn--bcher-kva.de]:80"
    );
    assert_eq!(split_host_port("bücher.de]:80"), ("bücher.de]", Some("80")));
}

#[test]
fn test_split_host_port_public() {
    assert_eq!(split_host_port("bücher.de:8080"), ("bücher.de", Some("8080")));
    assert_eq!(split_host_port("[::1]:443"), ("[::1]", Some("443")));
    assert_eq!(split_host_port("localhost"), ("localhost", None));
}
