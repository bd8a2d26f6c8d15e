use axum::{http::StatusCode, response::IntoResponse};

use crate::{IdentityError, ResolveError};

/// Every failure while answering a `/api/whoami/*` request.
///
/// None of them is recoverable by the client, so all map to a bare 500.
#[derive(thiserror::Error, Debug)]
pub enum WhoamiError {
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("{0}")]
    Identity(#[from] IdentityError),

    #[error("{0}")]
    Internal(#[from] error::InternalError),
}

impl IntoResponse for WhoamiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            WhoamiError::Internal(err) => err.into_response(),
            err => {
                tracing::error!("{:?}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
