use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok-1"), "Bearer tok-1");
}

#[test]
fn status_message_includes_trimmed_body_excerpt() {
    assert_eq!(status_message(503, "Service Unavailable", "  "), "503 Service Unavailable");
    assert_eq!(status_message(400, "Bad Request", " {\"name\":[\"required\"]}\n"), "400 Bad Request: {\"name\":[\"required\"]}");
    assert_eq!(status_message(502, "", ""), "502");
}

#[test]
fn status_message_caps_long_bodies() {
    let body = "x".repeat(500);
    let message = status_message(500, "Internal Server Error", &body);
    assert_eq!(message.len(), "500 Internal Server Error: ".len() + 200);
}

#[test]
fn api_urls_come_from_config_base() {
    let config = ClientConfig::from_parts(Some("https://data.example.org/api"), None);
    let api = Api::new(&config, Some("tok"));
    assert_eq!(api.token(), Some("tok"));
    assert_eq!(api.url(&Endpoint::Validation(9)), "https://data.example.org/api/asset_objects/9/validation/");
}

#[test]
fn calls_outside_the_browser_report_unavailable() {
    let api = Api::new(&ClientConfig::from_parts(None, None), None);
    let result = block_on_ready(api.get_job(1));
    assert_eq!(result.unwrap_err(), UNAVAILABLE);
}

/// Minimal executor for futures that complete on first poll.
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future did not complete immediately"),
    }
}
