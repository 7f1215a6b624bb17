use futures_util::future::BoxFuture;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr};

use crate::call_log::{log_call, Layer};
use crate::db::in_transaction;
use crate::dto::BoardDto;
use crate::entity::board::{self, DeleteFlag};
use crate::mapper;

/// Business rules for board posts.
///
/// `Ok(false)` means the request did not apply to the stored data (unknown
/// id, already deleted). `Err` is always a store failure and is passed through
/// untouched. Each method runs in its own transaction.
#[derive(Clone)]
pub struct BoardService {
    db: DatabaseConnection,
}

impl BoardService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts when `params.idx` is `None`, otherwise updates that row.
    /// There is no fallback to insert when the id does not exist.
    /// On a successful insert the new id is written back into `params.idx`.
    pub async fn register_board(&self, params: &mut BoardDto) -> Result<bool, DbErr> {
        let board = params.clone();
        let (rows_affected, new_idx) = self
            .transactional("register_board", move |txn| {
                Box::pin(async move {
                    match board.idx {
                        None => {
                            let inserted = mapper::insert_board(txn, &board).await?;
                            Ok((inserted.rows_affected, Some(inserted.idx)))
                        }
                        Some(_) => Ok((mapper::update_board(txn, &board).await?, None)),
                    }
                })
            })
            .await?;

        let registered = rows_affected == 1;
        if registered && new_idx.is_some() {
            params.idx = new_idx;
        }
        Ok(registered)
    }

    /// Returns the row as stored, deleted or not.
    pub async fn get_board_detail(&self, idx: i64) -> Result<Option<board::Model>, DbErr> {
        self.transactional("get_board_detail", move |txn| {
            Box::pin(async move { mapper::select_board_detail(txn, idx).await })
        })
        .await
    }

    pub async fn delete_board(&self, idx: i64) -> Result<bool, DbErr> {
        self.transactional("delete_board", move |txn| {
            Box::pin(async move {
                let current = mapper::select_board_detail(txn, idx).await?;
                let rows_affected = match current {
                    Some(board) if board.delete_yn == DeleteFlag::Active => mapper::delete_board(txn, idx).await?,
                    _ => 0,
                };
                Ok(rows_affected == 1)
            })
        })
        .await
    }

    /// Never fails with "no rows": an empty table yields an empty `Vec`.
    pub async fn get_board_list(&self) -> Result<Vec<board::Model>, DbErr> {
        self.transactional("get_board_list", |txn| {
            Box::pin(async move {
                let total = mapper::select_board_total_count(txn).await?;
                if total == 0 {
                    return Ok(Vec::new());
                }
                mapper::select_board_list(txn).await
            })
        })
        .await
    }

    async fn transactional<T, F>(&self, method: &str, f: F) -> Result<T, DbErr>
    where
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<T, DbErr>> + Send,
        T: Send,
    {
        log_call(Layer::Service, "BoardService", method);
        in_transaction(&self.db, f).await
    }
}
