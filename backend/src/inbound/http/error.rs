//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.
//!
//! Validation failures serialise as a bare field-to-messages object;
//! everything else uses the `{"detail": "..."}` shape. Internal and
//! unavailable failures are logged with their operator-facing message and
//! rendered with a stock detail so implementation specifics never reach
//! clients.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use tracing::error;

use crate::domain::Error;
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Detail rendered for internal failures.
pub const INTERNAL_DETAIL: &str = "A server error occurred.";

/// Detail rendered while a backing dependency is unreachable.
pub const UNAVAILABLE_DETAIL: &str = "Service temporarily unavailable.";

/// Body shape for failures described by a single sentence.
#[derive(Debug, Serialize)]
struct DetailBody<'a> {
    detail: &'a str,
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Validation(_) | Error::Malformed { .. } => StatusCode::BAD_REQUEST,
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }

        match self {
            Error::Validation(errors) => builder.json(errors),
            Error::Malformed { detail } | Error::NotFound { detail } => {
                builder.json(DetailBody { detail })
            }
            Error::Unavailable { message } => {
                error!(error = %message, "dependency unavailable while handling request");
                builder.json(DetailBody {
                    detail: UNAVAILABLE_DETAIL,
                })
            }
            Error::Internal { message } => {
                error!(error = %message, "internal error while handling request");
                builder.json(DetailBody {
                    detail: INTERNAL_DETAIL,
                })
            }
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Rendering redacts the message; clients never see actix internals.
        Error::internal(format!("actix error promoted to domain error: {err}"))
    }
}
