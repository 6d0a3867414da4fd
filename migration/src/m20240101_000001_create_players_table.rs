use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Players::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Players::Level)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::Score)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::AvatarId)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::LastGameSeconds)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Leaderboard queries sort on score
        manager
            .create_index(
                Index::create()
                    .name("idx_players_score")
                    .table(Players::Table)
                    .col(Players::Score)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CompletedWords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompletedWords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CompletedWords::PlayerId).integer().not_null())
                    .col(ColumnDef::new(CompletedWords::Category).integer().not_null())
                    .col(ColumnDef::new(CompletedWords::Word).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_completed_words_player")
                            .from(CompletedWords::Table, CompletedWords::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_completed_words_unique")
                    .table(CompletedWords::Table)
                    .col(CompletedWords::PlayerId)
                    .col(CompletedWords::Category)
                    .col(CompletedWords::Word)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompletedWords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Players {
    Table,
    Id,
    Name,
    Level,
    Score,
    AvatarId,
    LastGameSeconds,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CompletedWords {
    Table,
    Id,
    PlayerId,
    Category,
    Word,
}
