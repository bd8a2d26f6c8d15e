use axum::extract::State;
use axum_macros::debug_handler;

use crate::{AppState, WhoamiError, host::canonical_hostname};

pub const PATH: &str = "/api/whoami/hostname";

#[debug_handler]
#[tracing::instrument(skip_all, ret)]
pub async fn handler(State(state): State<AppState>) -> Result<String, WhoamiError> {
    hostname(&state).await
}

pub async fn hostname(AppState { resolver, .. }: &AppState) -> Result<String, WhoamiError> {
    canonical_hostname(resolver).await
}
