use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

/// Logs the method, URL and client address of every request and the resulting status.
///
/// The address is only known when the server is started with
/// `into_make_service_with_connect_info::<SocketAddr>()`; otherwise `unknown` is logged.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info!("Incoming -> METHOD [{}] URL [{}] IP [{}]", method, uri, ip);

    let response = next.run(req).await;

    tracing::info!(
        "Result -> METHOD [{}] URL [{}] IP [{}] STATUS [{}]",
        method,
        uri,
        ip,
        response.status().as_u16()
    );

    response
}
