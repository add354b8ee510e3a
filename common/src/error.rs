use actix_web::{http::StatusCode, HttpResponse};
use serde_json::json;

#[derive(Debug)]
pub struct ServiceError {
    err: anyhow::Error,
    code: Option<StatusCode>,
}

pub trait AddCode {
    fn code(self, code: u16) -> ServiceError;
}

impl AddCode for anyhow::Error {
    fn code(self, code: u16) -> ServiceError {
        ServiceError {
            err: self,
            code: StatusCode::from_u16(code).ok(),
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ServiceError: {}", self.err)
    }
}

impl actix_web::error::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        self.code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("{}", self);
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.err.to_string(),
        }))
    }
}

impl<E: Into<anyhow::Error>> From<E> for ServiceError {
    fn from(err: E) -> ServiceError {
        ServiceError {
            err: err.into(),
            code: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
