use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::Serialize;
use thiserror::Error;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl ErrorBody {
    pub fn new(error: &str, code: &str) -> Self {
        Self { error: error.to_string(), code: code.to_string() }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Missing `{0}` in request body")]
    Validation(&'static str),

    #[error("Request path id ({path}) and request body id ({body}) must match")]
    IdMismatch { path: String, body: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound => Status::NotFound,
            ApiError::Validation(_) | ApiError::IdMismatch { .. } => Status::BadRequest,
            ApiError::Database(_) => Status::InternalServerError,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::IdMismatch { .. } => "ID_MISMATCH",
            ApiError::Database(_) => "DB_ERROR",
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        match &self {
            ApiError::Database(e) => tracing::error!(error = %e, uri = %req.uri(), "store failure"),
            other => tracing::debug!(code = other.code(), uri = %req.uri(), "request rejected"),
        }
        let body = ErrorBody::new(&self.to_string(), self.code());
        (self.status(), Json(body)).respond_to(req)
    }
}
