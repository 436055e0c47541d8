//! Maps service errors onto HTTP responses with a `{ "message": ... }` body.

use super::models::MessageResponse;
use crate::board::DragError;
use crate::project::services::ProjectServiceError;
use crate::task::services::TaskServiceError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use log::error;
use thiserror::Error;

/// Error returned by every handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or referenced something invalid.
    #[error("{0}")]
    BadRequest(String),
    /// A task operation failed.
    #[error(transparent)]
    Task(#[from] TaskServiceError),
    /// A project operation failed.
    #[error(transparent)]
    Project(#[from] ProjectServiceError),
    /// A drop could not be handled.
    #[error(transparent)]
    Drag(#[from] DragError),
}

impl ApiError {
    /// Builds a 400 error from any displayable cause.
    #[must_use]
    pub fn bad_request(cause: impl std::fmt::Display) -> Self {
        Self::BadRequest(cause.to_string())
    }
}

const fn task_status(err: &TaskServiceError) -> StatusCode {
    match err {
        TaskServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        TaskServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        TaskServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Task(err) | Self::Project(ProjectServiceError::Cascade(err)) => task_status(err),
            Self::Project(ProjectServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Project(ProjectServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Project(ProjectServiceError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Drag(DragError::InvalidColumn(_)) => StatusCode::BAD_REQUEST,
            Self::Drag(DragError::Store(err)) => task_status(err),
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            Self::Task(TaskServiceError::NotFound(_)) => "Task not found".to_owned(),
            Self::Project(ProjectServiceError::NotFound(_)) => "Project not found".to_owned(),
            _ if status.is_server_error() => {
                error!("request failed: {self}");
                "Internal server error".to_owned()
            }
            _ => self.to_string(),
        };
        HttpResponse::build(status).json(MessageResponse { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::domain::TaskId;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    async fn message_of(err: &ApiError) -> String {
        let body = to_bytes(err.error_response().into_body())
            .await
            .expect("read error body");
        let decoded: MessageResponse = serde_json::from_slice(&body).expect("message body");
        decoded.message
    }

    #[rstest]
    #[actix_web::test]
    async fn bad_request_keeps_its_cause() {
        let err = ApiError::bad_request("groupBy must be priority or status");

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(message_of(&err).await, "groupBy must be priority or status");
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_task_has_a_fixed_message() {
        let err = ApiError::from(TaskServiceError::NotFound(TaskId::new()));

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(message_of(&err).await, "Task not found");
    }
}
