use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::api::types::ErrorBody;
use crate::error::CreaseError;

/// Handler error rendered as `{"error": message}` with a 500 status
#[derive(Debug)]
pub struct ApiError(pub CreaseError);

pub type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

impl From<CreaseError> for ApiError {
    fn from(err: CreaseError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(err) = self;
        if err.is_no_data() {
            warn!("{err}");
        } else {
            error!(error = ?err, "request failed");
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: err.to_string(),
            }),
        )
            .into_response()
    }
}
