use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub level: i32,
    pub score: i64,
    #[sea_orm(column_name = "avatar_id")]
    pub avatar_id: i32,
    #[sea_orm(column_name = "last_game_seconds")]
    pub last_game_seconds: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::completed_words::Entity")]
    CompletedWords,
}

impl Related<super::completed_words::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompletedWords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
