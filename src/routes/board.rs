use actix_web::{web, HttpResponse};

use crate::call_log::{log_call, Layer};
use crate::dto::{BoardDto, IdxParam};
use crate::error::AppError;
use crate::response::redirect;
use crate::service::BoardService;
use crate::view::{render, show_message_with_redirect, BoardListTemplate, BoardViewTemplate, BoardWriteTemplate};

pub const LIST_URI: &str = "/board/list.do";

const CONTROLLER: &str = "BoardController";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/write.do").route(web::get().to(open_board_write)))
        .service(web::resource("/register.do").route(web::post().to(register_board)))
        .service(web::resource("/list.do").route(web::get().to(open_board_list)))
        .service(web::resource("/view.do").route(web::get().to(open_board_detail)))
        .service(web::resource("/delete.do").route(web::post().to(delete_board)));
}

async fn open_board_write(
    service: web::Data<BoardService>,
    query: web::Query<IdxParam>,
) -> Result<HttpResponse, AppError> {
    log_call(Layer::Controller, CONTROLLER, "open_board_write");
    let board = match query.idx {
        None => BoardDto::default(),
        Some(idx) => match service.get_board_detail(idx).await? {
            Some(board) => BoardDto::from(board),
            None => return Ok(redirect(LIST_URI)),
        },
    };
    render(&BoardWriteTemplate { board })
}

async fn register_board(
    service: web::Data<BoardService>,
    form: web::Form<BoardDto>,
) -> Result<HttpResponse, AppError> {
    log_call(Layer::Controller, CONTROLLER, "register_board");
    let mut params = form.into_inner();
    if !service.register_board(&mut params).await? {
        return Err(AppError::fail("게시글 등록에 실패하였습니다."));
    }
    show_message_with_redirect("게시글 등록이 완료되었습니다.", LIST_URI)
}

/// Soft-deleted posts stay in the service result and are dropped here.
async fn open_board_list(service: web::Data<BoardService>) -> Result<HttpResponse, AppError> {
    log_call(Layer::Controller, CONTROLLER, "open_board_list");
    let boards = service
        .get_board_list()
        .await?
        .into_iter()
        .filter(|board| !board.is_deleted())
        .collect();
    render(&BoardListTemplate { boards })
}

async fn open_board_detail(
    service: web::Data<BoardService>,
    query: web::Query<IdxParam>,
) -> Result<HttpResponse, AppError> {
    log_call(Layer::Controller, CONTROLLER, "open_board_detail");
    let Some(idx) = query.idx else {
        return Ok(redirect(LIST_URI));
    };
    match service.get_board_detail(idx).await? {
        Some(board) if !board.is_deleted() => render(&BoardViewTemplate { board }),
        _ => Ok(redirect(LIST_URI)),
    }
}

async fn delete_board(
    service: web::Data<BoardService>,
    form: web::Form<IdxParam>,
) -> Result<HttpResponse, AppError> {
    log_call(Layer::Controller, CONTROLLER, "delete_board");
    let idx = form.idx.ok_or_else(AppError::param_error)?;
    if !service.delete_board(idx).await? {
        return Err(AppError::fail("게시글 삭제에 실패하였습니다."));
    }
    show_message_with_redirect("게시글 삭제가 완료되었습니다.", LIST_URI)
}
