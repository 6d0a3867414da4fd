use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per save; the same session id may appear more than once.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "saved_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "session_id")]
    pub session_id: Uuid,
    pub word: String,
    pub category: i32,
    /// Guessed letters concatenated in sorted order.
    #[sea_orm(column_name = "guessed_letters")]
    pub guessed_letters: String,
    #[sea_orm(column_name = "incorrect_guesses")]
    pub incorrect_guesses: i32,
    pub solved: bool,
    #[sea_orm(column_name = "remaining_guesses")]
    pub remaining_guesses: i32,
    #[sea_orm(column_name = "time_limit_seconds")]
    pub time_limit_seconds: i64,
    #[sea_orm(column_name = "started_at")]
    pub started_at: DateTimeUtc,
    #[sea_orm(column_name = "ended_at")]
    pub ended_at: Option<DateTimeUtc>,
    #[sea_orm(column_name = "saved_at")]
    pub saved_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
