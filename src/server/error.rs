use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json
};
use log::{debug, error, warn};
use serde_json::{json, Value};

use crate::backend::BackendError;

#[derive(Debug)]
pub(crate) enum ServerError {
    InvalidBody(serde_json::Error),
    NotFound(Value),
    MethodNotAllowed,
    /// The data file could not be loaded. Carries the message sent to the client.
    Unavailable(&'static str, BackendError)
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            Self::InvalidBody(err) => {
                warn!("rejected request body: {}", err);
                (StatusCode::BAD_REQUEST, "Invalid JSON data")
            },
            Self::NotFound(id) => {
                debug!("no user with id {}", id);
                (StatusCode::NOT_FOUND, "Data with specified ID not found")
            },
            Self::MethodNotAllowed =>
                (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
            Self::Unavailable(msg, err) => {
                error!("error reading data file: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(json!({ "error": msg }))).into_response()
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(err)
    }
}
