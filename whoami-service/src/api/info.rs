use axum::{Json, extract::State};
use axum_macros::debug_handler;
use serde::Serialize;

use crate::{AppState, WhoamiError, api};

pub const PATH: &str = "/api/whoami/info";

#[derive(Debug, Serialize)]
pub struct Info {
    pub id: String,
    pub hostname: String,
    pub ip: String,
}

#[debug_handler]
#[tracing::instrument(skip_all, ret)]
pub async fn handler(State(state): State<AppState>) -> Result<Json<Info>, WhoamiError> {
    // in this order; the first failure wins
    let id = api::id::id(&state).await?;
    let hostname = api::hostname::hostname(&state).await?;
    let ip = api::ip::ip(&state).await?;

    Ok(Json(Info { id, hostname, ip }))
}
