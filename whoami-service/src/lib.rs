mod api;
mod env;
mod host;
mod identity;
mod whoami_error;

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{Router, middleware::from_fn, routing::get};
use error::Context;
use middleware::{latency_ms, mw_client_ip, mw_handle_leaked_5xx, span};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use env::{CF_INSTANCE_INDEX, Environment, VCAP_APPLICATION};
pub use host::{HostResolver, ResolveError};

use env::ProcessEnvironment;
use host::SystemResolver;
use identity::{IdentityError, instance_id};
use whoami_error::WhoamiError;

#[derive(Debug)]
pub struct ServerOpts {
    pub host: IpAddr,
    pub port: u16,
    pub application_name: String,
}

#[derive(Clone)]
pub struct AppState {
    /// Identity fallback when the platform descriptor names no application.
    pub application_name: Arc<str>,
    pub environment: Arc<dyn Environment>,
    pub resolver: Arc<dyn HostResolver>,
}

impl AppState {
    pub fn new(
        application_name: impl Into<Arc<str>>,
        environment: impl Environment,
        resolver: impl HostResolver,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            environment: Arc::new(environment),
            resolver: Arc::new(resolver),
        }
    }
}

pub fn server(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(from_fn(mw_client_ip))
        .layer(TraceLayer::new_for_http().make_span_with(span))
        .layer(from_fn(latency_ms))
        .layer(from_fn(mw_handle_leaked_5xx));

    Router::new()
        .route(api::health::PATH, get(api::health::handler))
        .route(api::hostname::PATH, get(api::hostname::handler))
        .route(api::ip::PATH, get(api::ip::handler))
        .route(api::id::PATH, get(api::id::handler))
        .route(api::info::PATH, get(api::info::handler))
        .with_state(state)
        .layer(middleware)
}

pub async fn serve(opts: ServerOpts) -> Result<(), ServerError> {
    tracing::info!("{:?}", opts);

    let state = AppState::new(opts.application_name, ProcessEnvironment, SystemResolver);
    let app = server(state).into_make_service_with_connect_info::<SocketAddr>();

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
