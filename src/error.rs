use actix_web::{http::StatusCode, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;

use crate::response::response_from_error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{msg}")]
    Biz { code: i32, msg: String },
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    pub fn param_error() -> Self {
        Self::Biz { code: 1, msg: "올바르지 않은 접근입니다.".to_string() }
    }

    pub fn fail(msg: impl Into<String>) -> Self {
        Self::Biz { code: 2, msg: msg.into() }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Biz { code, .. } => *code,
            Self::Database(_) => 98,
            Self::Render(_) => 99,
        }
    }

    /// The text shown to the user. Infrastructure details never leave the server.
    pub fn msg(&self) -> &str {
        match self {
            Self::Biz { msg, .. } => msg,
            Self::Database(_) => "데이터베이스 처리 과정에 문제가 발생하였습니다.",
            Self::Render(_) => "시스템에 문제가 발생하였습니다.",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        response_from_error(self)
    }
}
