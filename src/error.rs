use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use awc::error::{PayloadError, SendRequestError};
use serde::Serialize;

#[derive(Debug)]
pub enum Error {
    // 401
    MissingBearerToken,

    // 404
    PathNotFound,

    // 500
    FixturesUnavailable,
    ResponseConstruction(String),
    BackendRequestFailed { message: String, detail: String },
    Io(IoError),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingBearerToken => StatusCode::UNAUTHORIZED,
            Error::PathNotFound => StatusCode::NOT_FOUND,
            Error::FixturesUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            Error::ResponseConstruction(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::BackendRequestFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // The body shapes are part of the wire contract consumed by the
    // rendering layer, so each variant keeps its exact original form.
    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Message<'a> {
            message: &'a str,
        }

        #[derive(Serialize)]
        struct Diagnostic<'a> {
            error: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            stack: Option<&'a str>,
        }

        let status = self.status_code();
        match self {
            Error::MissingBearerToken => HttpResponse::build(status).json(Message {
                message: "Unauthorized",
            }),
            Error::PathNotFound => HttpResponse::build(status).json(Message {
                message: "Not found",
            }),
            Error::FixturesUnavailable | Error::Io(_) => HttpResponse::build(status).json(Message {
                message: "Internal server error",
            }),
            Error::ResponseConstruction(message) => HttpResponse::build(status).json(Diagnostic {
                error: message,
                stack: None,
            }),
            Error::BackendRequestFailed { message, detail } => {
                HttpResponse::build(status).json(Diagnostic {
                    error: message,
                    stack: Some(detail),
                })
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<SendRequestError> for Error {
    fn from(error: SendRequestError) -> Error {
        Error::BackendRequestFailed {
            message: error.to_string(),
            detail: format!("{:?}", error),
        }
    }
}

impl From<PayloadError> for Error {
    fn from(error: PayloadError) -> Error {
        Error::BackendRequestFailed {
            message: error.to_string(),
            detail: format!("{:?}", error),
        }
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::Io(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}
