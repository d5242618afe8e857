use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use snafu::{Location, Snafu};

use crate::dashboard::UnknownSlot;

#[derive(Debug, Snafu, Serialize)]
#[snafu(visibility(pub(crate)))]
#[serde(tag = "error", content = "data")]
pub enum ApiError {
    #[snafu(display("chart `{slot}` does not exist"))]
    UnknownChart {
        slot: String,

        #[serde(skip)]
        source: UnknownSlot,

        #[serde(skip)]
        #[snafu(implicit)]
        location: Location,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownChart { .. } => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(flatten)]
    data: ApiError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!(error = ?self, "{}", self);

        let status = self.status();
        let content = ErrorResponse {
            message: self.to_string(),
            data: self,
        };

        (status, Json(content)).into_response()
    }
}
