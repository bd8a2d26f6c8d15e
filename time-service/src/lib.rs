mod api;

use std::net::{IpAddr, SocketAddr};

use axum::{Router, middleware::from_fn, routing::get};
use error::Context;
use middleware::{latency_ms, mw_client_ip, mw_handle_leaked_5xx, span};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

#[derive(Debug)]
pub struct ServerOpts {
    pub host: IpAddr,
    pub port: u16,
}

pub fn server() -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(from_fn(mw_client_ip))
        .layer(TraceLayer::new_for_http().make_span_with(span))
        .layer(from_fn(latency_ms))
        .layer(from_fn(mw_handle_leaked_5xx));

    Router::new()
        .route(api::health::PATH, get(api::health::handler))
        .route(api::current::PATH, get(api::current::handler))
        .layer(middleware)
}

pub async fn serve(opts: ServerOpts) -> Result<(), ServerError> {
    tracing::info!("{:?}", opts);

    let app = server().into_make_service_with_connect_info::<SocketAddr>();

    let addr = SocketAddr::new(opts.host, opts.port);
    let listener = TcpListener::bind(addr)
        .await
        .context(format!("bind :: {addr}"))?;
    tracing::info!(
        "listening on {}",
        listener.local_addr().context("local_addr")?
    );
    axum::serve(listener, app)
        .await
        .context("axum::serve")
        .map_err(|e| e.into())
}

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    Internal(#[from] error::InternalError),
}
