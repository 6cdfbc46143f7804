//! HTTP mapping of sign lookup failures.
//!
//! Invalid names, private signs and unknown signs share one response so a
//! caller cannot probe which private signs exist.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::signs::SignError;

/// Externally visible outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Bad, private or unknown sign; bad sub-resource name
    InvalidSignName,
    /// Route matched without a sign name
    MissingSignName,
    /// Validated sub-resource with no file behind it
    NotFound,
    InternalError,
}

impl ApiErrorCode {
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidSignName | Self::MissingSignName => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body. Fixed per code, never derived from the request.
    pub fn body(self) -> &'static str {
        match self {
            Self::InvalidSignName => "invalid sign name",
            Self::MissingSignName => "sign name not provided",
            Self::NotFound => "not found",
            Self::InternalError => "internal error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    pub code: ApiErrorCode,
}

impl ApiError {
    pub fn from_code(code: ApiErrorCode) -> Self {
        Self { code }
    }

    /// Failure while resolving the sign itself.
    pub fn sign(err: SignError) -> Self {
        tracing::debug!(kind = err.kind(), "Sign lookup rejected: {}", err);
        match err {
            SignError::Io(e) => {
                tracing::error!("Sign lookup I/O error: {}", e);
                Self::from_code(ApiErrorCode::InternalError)
            }
            _ => Self::from_code(ApiErrorCode::InvalidSignName),
        }
    }

    /// Failure while resolving an asset or program inside a visible sign.
    pub fn resource(err: SignError) -> Self {
        tracing::debug!(kind = err.kind(), "Resource lookup rejected: {}", err);
        match err {
            SignError::NotFound(_) => Self::from_code(ApiErrorCode::NotFound),
            SignError::Io(e) => {
                tracing::error!("Resource lookup I/O error: {}", e);
                Self::from_code(ApiErrorCode::InternalError)
            }
            _ => Self::from_code(ApiErrorCode::InvalidSignName),
        }
    }

    pub fn internal(context: &str, err: impl std::fmt::Display) -> Self {
        tracing::error!("{}: {}", context, err);
        Self::from_code(ApiErrorCode::InternalError)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.code.http_status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.code.body(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_errors_collapse() {
        let invalid = ApiError::sign(SignError::InvalidName("..".into()));
        let forbidden = ApiError::sign(SignError::Forbidden("foo".into()));
        let missing = ApiError::sign(SignError::NotFound("ghost".into()));
        assert_eq!(invalid, forbidden);
        assert_eq!(invalid, missing);
        assert_eq!(invalid.code.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.code.body(), "invalid sign name");
    }

    #[test]
    fn test_resource_not_found_is_404() {
        let err = ApiError::resource(SignError::NotFound("foo/assets/x.png".into()));
        assert_eq!(err.code.http_status(), StatusCode::NOT_FOUND);

        let err = ApiError::resource(SignError::InvalidName("../x".into()));
        assert_eq!(err.code.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_io_is_internal() {
        let err = ApiError::sign(SignError::Io(std::io::Error::other("disk")));
        assert_eq!(err.code, ApiErrorCode::InternalError);
        assert_eq!(err.code.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
