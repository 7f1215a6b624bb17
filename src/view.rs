use actix_web::HttpResponse;
use askama::Template;

use crate::dto::BoardDto;
use crate::entity::board;
use crate::error::AppError;

#[derive(Template)]
#[template(path = "board/list.html")]
pub struct BoardListTemplate {
    pub boards: Vec<board::Model>,
}

#[derive(Template)]
#[template(path = "board/view.html")]
pub struct BoardViewTemplate {
    pub board: board::Model,
}

#[derive(Template)]
#[template(path = "board/write.html")]
pub struct BoardWriteTemplate {
    pub board: BoardDto,
}

/// Shows `message`, then submits a GET form to `redirect_uri`.
#[derive(Template)]
#[template(path = "utils/message-redirect.html")]
pub struct MessageRedirectTemplate {
    pub message: String,
    pub redirect_uri: String,
}

pub fn render<T: Template>(template: &T) -> Result<HttpResponse, AppError> {
    let body = template.render()?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body))
}

pub fn show_message_with_redirect(
    message: impl Into<String>,
    redirect_uri: impl Into<String>,
) -> Result<HttpResponse, AppError> {
    render(&MessageRedirectTemplate {
        message: message.into(),
        redirect_uri: redirect_uri.into(),
    })
}
