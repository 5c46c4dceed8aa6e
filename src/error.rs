use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use serde::Serialize;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the domain and service layers
#[derive(Debug, Error)]
pub enum Error {
    // Parsing and validation errors
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    InvalidTemporalRange(String),
    // Lookup errors
    #[error("{0} not found")]
    NotFound(&'static str),
    // Database errors
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type RestResult<T> = std::result::Result<T, RestError>;

/// Errors returned from REST endpoints
#[derive(Debug, Error)]
pub enum RestError {
    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Invalid Temporal Range: {0}")]
    InvalidTemporalRange(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Internal Server Error")]
    InternalError(anyhow::Error),
}

impl From<Error> for RestError {
    fn from(e: Error) -> Self {
        match e {
            Error::Validation(msg) => Self::Validation(msg),
            Error::InvalidTemporalRange(msg) => Self::InvalidTemporalRange(msg),
            Error::NotFound(entity) => Self::NotFound(entity),
            Error::Database(e) => e.into(),
        }
    }
}

impl From<sqlx::Error> for RestError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error.cause_chain = ?e, "Database error");
        Self::InternalError(e.into())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidTemporalRange(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
