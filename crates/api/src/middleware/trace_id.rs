//! Request id middleware.
//!
//! Tags every request with an id for log correlation.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the request id on both requests and responses.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware that extracts or generates a request id.
///
/// An incoming `x-request-id` header is reused so ids survive proxies;
/// otherwise a new UUID v4 is generated. The id is echoed on the response
/// and attached to the tracing span covering the request.
pub async fn trace_id(req: Request<Body>, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );
    let _guard = span.enter();

    let start = std::time::Instant::now();
    let mut response = next.run(req).await;

    tracing::info!(
        request_id = %request_id,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), header_value);
    }

    response
}
