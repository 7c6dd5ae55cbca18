//! Setup errors rendered as `application/problem+json`

use crate::contract::SetupError;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Problem body returned by the setup endpoints
///
/// `detail` carries the same text the form shows the operator.
#[derive(Debug, Serialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub detail: String,
}

impl From<SetupError> for Problem {
    fn from(error: SetupError) -> Self {
        let (status, kind, title) = match &error {
            SetupError::Parse { .. } => (
                StatusCode::BAD_REQUEST,
                "urn:crowdsec-setup:invalid-config-file",
                "Invalid Config File",
            ),
            SetupError::RemoteStore { .. } => (
                StatusCode::BAD_GATEWAY,
                "urn:crowdsec-setup:remote-store",
                "Remote Store Error",
            ),
            SetupError::Lifecycle { .. } => (
                StatusCode::BAD_GATEWAY,
                "urn:crowdsec-setup:setup-finalization",
                "Setup Finalization Failed",
            ),
        };
        Self {
            kind,
            title,
            status: status.as_u16(),
            detail: error.user_message(),
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_GATEWAY);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
        );
        response
    }
}
