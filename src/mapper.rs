//! Parameterized SQL against `tb_board`. Every function takes any sea-orm
//! connection, so the service can hand in an open transaction.
//!
//! No rule logic lives here: writes report affected rows and the service
//! decides what they mean.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Statement};

use crate::call_log::{log_call, Layer};
use crate::dto::BoardDto;
use crate::entity::board;

const MAPPER: &str = "BoardMapper";

/// Outcome of an insert: affected rows plus the store-assigned key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inserted {
    pub rows_affected: u64,
    pub idx: i64,
}

pub async fn insert_board<C: ConnectionTrait>(db: &C, params: &BoardDto) -> Result<Inserted, DbErr> {
    log_call(Layer::Mapper, MAPPER, "insert_board");
    let result = exec_sql(
        db,
        "insert into tb_board (title, content, writer, notice_yn, delete_yn, insert_time) \
         values (?, ?, ?, ?, 'N', CURRENT_TIMESTAMP)",
        vec![
            params.title.clone().into(),
            params.content.clone().into(),
            params.writer.clone().into(),
            params.notice_flag().into(),
        ],
    )
    .await?;

    let idx = i64::try_from(result.last_insert_id())
        .map_err(|_| DbErr::Custom(format!("insert id out of range: {}", result.last_insert_id())))?;
    Ok(Inserted {
        rows_affected: result.rows_affected(),
        idx,
    })
}

/// Soft-deleted rows are never updated.
pub async fn update_board<C: ConnectionTrait>(db: &C, params: &BoardDto) -> Result<u64, DbErr> {
    log_call(Layer::Mapper, MAPPER, "update_board");
    let Some(idx) = params.idx else {
        return Ok(0);
    };
    let result = exec_sql(
        db,
        "update tb_board set title = ?, content = ?, writer = ?, notice_yn = ?, \
         update_time = CURRENT_TIMESTAMP where idx = ? and delete_yn = 'N'",
        vec![
            params.title.clone().into(),
            params.content.clone().into(),
            params.writer.clone().into(),
            params.notice_flag().into(),
            idx.into(),
        ],
    )
    .await?;
    Ok(result.rows_affected())
}

pub async fn select_board_detail<C: ConnectionTrait>(db: &C, idx: i64) -> Result<Option<board::Model>, DbErr> {
    log_call(Layer::Mapper, MAPPER, "select_board_detail");
    board::Entity::find_by_id(idx).one(db).await
}

/// Notices first, then newest first.
pub async fn select_board_list<C: ConnectionTrait>(db: &C) -> Result<Vec<board::Model>, DbErr> {
    log_call(Layer::Mapper, MAPPER, "select_board_list");
    board::Entity::find()
        .order_by_desc(board::Column::NoticeYn)
        .order_by_desc(board::Column::Idx)
        .all(db)
        .await
}

pub async fn select_board_total_count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    log_call(Layer::Mapper, MAPPER, "select_board_total_count");
    board::Entity::find().count(db).await
}

/// Flips `delete_yn` to `Y`. Rows that are already deleted are left alone.
pub async fn delete_board<C: ConnectionTrait>(db: &C, idx: i64) -> Result<u64, DbErr> {
    log_call(Layer::Mapper, MAPPER, "delete_board");
    let result = exec_sql(
        db,
        "update tb_board set delete_yn = 'Y', delete_time = CURRENT_TIMESTAMP \
         where idx = ? and delete_yn = 'N'",
        vec![idx.into()],
    )
    .await?;
    Ok(result.rows_affected())
}

async fn exec_sql<C: ConnectionTrait>(
    db: &C,
    sql: &str,
    values: Vec<sea_orm::Value>,
) -> Result<sea_orm::ExecResult, DbErr> {
    let backend = db.get_database_backend();
    let stmt = Statement::from_sql_and_values(backend, sql, values);
    db.execute(stmt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_db;
    use crate::entity::board::DeleteFlag;

    #[actix_rt::test]
    async fn insert_assigns_sequential_keys() {
        let db = memory_db().await;
        let first = insert_board(&db, &BoardDto::new("a", "b", "c")).await.unwrap();
        let second = insert_board(&db, &BoardDto::new("d", "e", "f")).await.unwrap();

        assert_eq!(first, Inserted { rows_affected: 1, idx: 1 });
        assert_eq!(second, Inserted { rows_affected: 1, idx: 2 });

        let row = select_board_detail(&db, 1).await.unwrap().unwrap();
        assert_eq!(row.title, "a");
        assert_eq!(row.notice_yn, "N");
        assert_eq!(row.delete_yn, DeleteFlag::Active);
        assert!(row.update_time.is_none());
        assert!(row.delete_time.is_none());
    }

    #[actix_rt::test]
    async fn update_touches_only_the_matching_active_row() {
        let db = memory_db().await;
        insert_board(&db, &BoardDto::new("a", "b", "c")).await.unwrap();

        let mut params = BoardDto::new("a2", "b2", "c2");
        params.idx = Some(1);
        assert_eq!(update_board(&db, &params).await.unwrap(), 1);

        params.idx = Some(42);
        assert_eq!(update_board(&db, &params).await.unwrap(), 0);

        params.idx = None;
        assert_eq!(update_board(&db, &params).await.unwrap(), 0);

        let row = select_board_detail(&db, 1).await.unwrap().unwrap();
        assert_eq!((row.title.as_str(), row.content.as_str(), row.writer.as_str()), ("a2", "b2", "c2"));
        assert!(row.update_time.is_some());
    }

    #[actix_rt::test]
    async fn delete_is_a_soft_one_way_flip() {
        let db = memory_db().await;
        insert_board(&db, &BoardDto::new("a", "b", "c")).await.unwrap();

        assert_eq!(delete_board(&db, 1).await.unwrap(), 1);
        assert_eq!(delete_board(&db, 1).await.unwrap(), 0);
        assert_eq!(delete_board(&db, 7).await.unwrap(), 0);

        let row = select_board_detail(&db, 1).await.unwrap().unwrap();
        assert_eq!(row.delete_yn, DeleteFlag::Deleted);
        assert!(row.delete_time.is_some());
        assert_eq!(select_board_total_count(&db).await.unwrap(), 1);

        let mut params = BoardDto::new("x", "y", "z");
        params.idx = Some(1);
        assert_eq!(update_board(&db, &params).await.unwrap(), 0);
    }

    #[actix_rt::test]
    async fn list_puts_notices_first_then_newest() {
        let db = memory_db().await;
        insert_board(&db, &BoardDto::new("old", "b", "c")).await.unwrap();
        let mut notice = BoardDto::new("notice", "b", "c");
        notice.notice_yn = Some("Y".to_string());
        insert_board(&db, &notice).await.unwrap();
        insert_board(&db, &BoardDto::new("new", "b", "c")).await.unwrap();

        let titles = select_board_list(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["notice", "new", "old"]);
        assert_eq!(select_board_total_count(&db).await.unwrap(), 3);
    }
}
