use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_board")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub idx: i64,
    pub title: String,
    pub content: String,
    pub writer: String,
    pub notice_yn: String,
    pub delete_yn: DeleteFlag,
    pub insert_time: DateTime,
    pub update_time: Option<DateTime>,
    pub delete_time: Option<DateTime>,
}

/// Soft-delete marker. `Deleted` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(Some(1))")]
pub enum DeleteFlag {
    #[sea_orm(string_value = "N")]
    Active,
    #[sea_orm(string_value = "Y")]
    Deleted,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_deleted(&self) -> bool {
        self.delete_yn == DeleteFlag::Deleted
    }

    pub fn is_notice(&self) -> bool {
        self.notice_yn == "Y"
    }

    pub fn inserted_at(&self) -> String {
        self.insert_time.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn updated_at(&self) -> String {
        self.update_time
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }
}
