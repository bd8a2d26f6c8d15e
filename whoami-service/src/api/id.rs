use axum::extract::State;
use axum_macros::debug_handler;

use crate::{AppState, CF_INSTANCE_INDEX, VCAP_APPLICATION, WhoamiError, api, instance_id};

pub const PATH: &str = "/api/whoami/id";

#[debug_handler]
#[tracing::instrument(skip_all, ret)]
pub async fn handler(State(state): State<AppState>) -> Result<String, WhoamiError> {
    id(&state).await
}

/// `"{application_name}/{instance_index}"` on the platform, the hostname anywhere else.
pub async fn id(state: &AppState) -> Result<String, WhoamiError> {
    let instance_index = state.environment.var(CF_INSTANCE_INDEX);
    let descriptor = state.environment.var(VCAP_APPLICATION);

    match instance_id(
        instance_index.as_deref(),
        descriptor.as_deref(),
        &state.application_name,
    )? {
        Some(id) => Ok(id),
        None => {
            tracing::debug!(
                "{} or {} not set, identifying by hostname",
                CF_INSTANCE_INDEX,
                VCAP_APPLICATION
            );
            api::hostname::hostname(state).await
        }
    }
}
