use std::time::Duration;

use gemini_client::http::select_transport;
use gemini_client::options::TransportOptions;

#[test]
fn test_transport_options_builder() {
    let options = TransportOptions::new()
        .with_timeout(Duration::from_secs(30))
        .with_proxy("http://proxy.example.com".to_string())
        .with_header("X-Custom-Header".to_string(), "Value".to_string());

    match options {
        TransportOptions::Http {
            timeout,
            proxy,
            headers,
        } => {
            assert_eq!(timeout, Some(Duration::from_secs(30)));
            assert_eq!(proxy, Some("http://proxy.example.com".to_string()));

            let headers = headers.unwrap();
            assert_eq!(headers.get("X-Custom-Header"), Some(&"Value".to_string()));
        }
    }
}

#[test]
fn test_select_transport_prefers_custom_client() {
    let custom = reqwest::Client::new();
    let options = TransportOptions::new().with_timeout(Duration::from_secs(5));

    let selected = select_transport(Some(custom), Some(&options)).unwrap();
    assert!(selected.is_some());
}

#[test]
fn test_select_transport_builds_from_options() {
    let options = TransportOptions::new().with_timeout(Duration::from_secs(5));

    let selected = select_transport(None, Some(&options)).unwrap();
    assert!(selected.is_some());
}

#[test]
fn test_select_transport_with_nothing_bound() {
    let selected = select_transport(None, None).unwrap();
    assert!(selected.is_none());
}
