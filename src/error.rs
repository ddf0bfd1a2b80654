use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Tag carried by every request error; the only place kinds become status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedRequest,
    StorageUnavailable,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::MalformedRequest => StatusCode::BAD_REQUEST,
            ErrorKind::StorageUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Body or path parameter could not be decoded; no storage access was attempted.
    #[error("{0}")]
    MalformedRequest(String),

    /// Any failure reported by the storage engine, constraint violations included.
    #[error(transparent)]
    StorageUnavailable(#[from] sqlx::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::MalformedRequest(_) => ErrorKind::MalformedRequest,
            AppError::StorageUnavailable(_) => ErrorKind::StorageUnavailable,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.kind().status_code();
        let message = self.to_string();

        let body = if status.is_server_error() {
            tracing::error!(error = %message, "request failed in storage");
            json!({"status": "error", "message": message})
        } else {
            tracing::debug!(error = %message, "rejected malformed request");
            json!({"status": "fail", "message": message})
        };

        (status, Json(body)).into_response()
    }
}

/// Fatal conditions that stop the process before it starts serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to open database {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: hyper::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] hyper::Error),
}
