use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::models::ErrorBody;
use crate::synthesizer::ValidationError;

/// Errors surfaced over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request is incomplete. Its message is shown to the caller.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Anything else. Only `public` reaches the caller; `detail` is logged.
    #[error("{public}: {detail}")]
    Internal {
        public: &'static str,
        detail: String,
    },
}

impl ApiError {
    pub fn internal(public: &'static str, detail: impl ToString) -> Self {
        Self::Internal {
            public,
            detail: detail.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Validation(e) => e.to_string(),
            Self::Internal { public, detail } => {
                error!(%detail, "{public}");
                public.to_string()
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
