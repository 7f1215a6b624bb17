use actix_web::{
    error::{QueryPayloadError, UrlencodedError},
    http::header,
    HttpRequest, HttpResponse,
};
use log::{debug, error, warn};

use crate::error::AppError;
use crate::routes::board::LIST_URI;
use crate::view::show_message_with_redirect;

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("bad query on {}: {}", req.path(), err);
    AppError::param_error().into()
}

pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    warn!("bad form on {}: {}", req.path(), err);
    AppError::param_error().into()
}

pub fn redirect(uri: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, uri))
        .finish()
}

/// Every failure lands back on the list page with a message.
pub fn response_from_error(err: &AppError) -> HttpResponse {
    match err {
        AppError::Biz { .. } => debug!("request rejected code={} msg={}", err.code(), err),
        _ => error!("request failed code={}: {}", err.code(), err),
    }
    show_message_with_redirect(err.msg(), LIST_URI).unwrap_or_else(|e| {
        error!("message page render failed: {}", e);
        redirect(LIST_URI)
    })
}
