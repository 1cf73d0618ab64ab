//! Mapping of specification errors onto HTTP responses.
use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::spec::SpecError;

impl ResponseError for SpecError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::MissingRef | Self::InvalidRef { .. } => StatusCode::BAD_REQUEST,
            Self::Transport { .. }
            | Self::UpstreamStatus { .. }
            | Self::Base64 { .. }
            | Self::Utf8 { .. }
            | Self::MissingDescriptor
            | Self::MalformedDescriptor { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(mime::TEXT_PLAIN_UTF_8)
            .body(format!("Error: {self}"))
    }
}
