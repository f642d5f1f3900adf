//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};

/// Log timestamp, method and path (with query) of every request, then pass
/// it on unchanged.
pub async fn log_request(request: Request, next: Next) -> Response {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    tracing::info!("[{}] {} {}", timestamp, request.method(), path);

    next.run(request).await
}
