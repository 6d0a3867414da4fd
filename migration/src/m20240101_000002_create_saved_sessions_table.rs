use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SavedSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SavedSessions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SavedSessions::SessionId).uuid().not_null())
                    .col(ColumnDef::new(SavedSessions::Word).string().not_null())
                    .col(ColumnDef::new(SavedSessions::Category).integer().not_null())
                    .col(
                        ColumnDef::new(SavedSessions::GuessedLetters)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SavedSessions::IncorrectGuesses)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SavedSessions::Solved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SavedSessions::RemainingGuesses)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SavedSessions::TimeLimitSeconds)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SavedSessions::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SavedSessions::EndedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(SavedSessions::SavedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_saved_sessions_session_id")
                    .table(SavedSessions::Table)
                    .col(SavedSessions::SessionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SavedSessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SavedSessions {
    Table,
    Id,
    SessionId,
    Word,
    Category,
    GuessedLetters,
    IncorrectGuesses,
    Solved,
    RemainingGuesses,
    TimeLimitSeconds,
    StartedAt,
    EndedAt,
    SavedAt,
}
