pub mod board;

use actix_web::{web, HttpResponse};

use crate::response::{form_error_handler, query_error_handler, redirect};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::scope("/board").configure(board::config));
}

async fn index() -> HttpResponse {
    redirect(board::LIST_URI)
}
