//! HTTP response building module
//!
//! Builders for the status codes the demo produces. Builder failures
//! are logged and degraded to a bare response instead of panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 response with a plain-text body.
pub fn build_text_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    build_content_response(content, "text/plain; charset=utf-8", is_head)
}

/// Build 200 response with an HTML body.
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    build_content_response(content, "text/html; charset=utf-8", is_head)
}

fn build_content_response(
    content: String,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 400 Bad Request response carrying the binding failure message
pub fn build_400_response(message: &str) -> Response<Full<Bytes>> {
    let body = format!("400 Bad Request: {message}");
    Response::builder()
        .status(400)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("400", &e);
            Response::new(Full::new(Bytes::from("400 Bad Request")))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response listing the allowed methods
pub fn build_405_response(allow: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", allow)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build 415 Unsupported Media Type response for body-format mismatches
pub fn build_415_response(message: &str) -> Response<Full<Bytes>> {
    let body = format!("415 Unsupported Media Type: {message}");
    Response::builder()
        .status(415)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("415", &e);
            Response::new(Full::new(Bytes::from("415 Unsupported Media Type")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, POST, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response_sets_content_length() {
        let response = build_text_response("name=Alice, age=10".to_string(), false);
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Length").unwrap(), "18");
    }

    #[test]
    fn test_head_response_has_empty_body_but_real_length() {
        let response = build_html_response("<html></html>".to_string(), true);
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Length").unwrap(), "13");
    }

    #[test]
    fn test_405_carries_allow_header() {
        let response = build_405_response("POST, OPTIONS");
        assert_eq!(response.status(), 405);
        assert_eq!(response.headers().get("Allow").unwrap(), "POST, OPTIONS");
    }

    #[test]
    fn test_options_cors_headers() {
        let response = build_options_response(true);
        assert_eq!(response.status(), 204);
        assert!(response
            .headers()
            .contains_key("Access-Control-Allow-Origin"));

        let response = build_options_response(false);
        assert!(!response
            .headers()
            .contains_key("Access-Control-Allow-Origin"));
    }
}
