use crate::envelope::ResponseEnvelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

impl<T: Serialize> ResponseEnvelope<T> {
    /// Renders the envelope as a JSON response with an explicit status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        if self.success {
            debug!("Rendering successful envelope with status {}", status);
        } else {
            debug!(
                "Rendering error envelope with status {}: {}",
                status,
                self.message.as_deref().unwrap_or_default()
            );
        }
        (status, Json(self)).into_response()
    }
}

/// `200 OK` for successful envelopes, `500 Internal Server Error` otherwise.
/// Client errors such as a missing resource need a 4xx status; render those
/// with [`ResponseEnvelope::into_response_with`].
impl<T: Serialize> IntoResponse for ResponseEnvelope<T> {
    fn into_response(self) -> Response {
        let status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        self.into_response_with(status)
    }
}
