use crate::config::ServeConfig;
use crate::server::headers::{HeaderSet, WASM_CONTENT_TYPE};
use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use std::net::SocketAddr;
use tower_http::services::ServeDir;

/// Static file router over the serving root. Requests resolve with index-file
/// semantics; every response passes through the dev header set.
pub fn create_router(config: &ServeConfig) -> Router {
    let header_set = HeaderSet::for_isolation(config.isolated);

    Router::new()
        .fallback_service(ServeDir::new(&config.root).append_index_html_on_directories(true))
        .layer(middleware::from_fn_with_state(header_set, apply_dev_headers))
        .layer(middleware::from_fn(log_request))
}

async fn apply_dev_headers(
    State(header_set): State<HeaderSet>,
    request: Request,
    next: Next,
) -> Response {
    let is_wasm = request.uri().path().ends_with(".wasm");

    let mut response = next.run(request).await;
    header_set.apply(response.headers_mut());

    // Default inference tables may omit the WASM MIME type, and browsers
    // refuse to stream-compile modules without it.
    if is_wasm && response.status() == StatusCode::OK {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(WASM_CONTENT_TYPE));
    }

    response
}

async fn log_request(request: Request, next: Next) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    tracing::info!(
        "{} - \"{} {}\" {}",
        client,
        method,
        path,
        response.status().as_u16()
    );

    response
}
