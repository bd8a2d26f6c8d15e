use std::time::Instant;

use axum::{
    body::Body,
    http::{Request, Response},
    middleware::Next,
};

pub async fn latency_ms(request: Request<Body>, next: Next) -> Response<Body> {
    let start = Instant::now();
    let response = next.run(request).await;
    tracing::info!(
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "finished"
    );
    response
}
