use axum::extract::State;
use axum_macros::debug_handler;

use crate::{AppState, WhoamiError, host::local_ip};

pub const PATH: &str = "/api/whoami/ip";

#[debug_handler]
#[tracing::instrument(skip_all, ret)]
pub async fn handler(State(state): State<AppState>) -> Result<String, WhoamiError> {
    ip(&state).await
}

pub async fn ip(AppState { resolver, .. }: &AppState) -> Result<String, WhoamiError> {
    Ok(local_ip(resolver).await?.to_string())
}
