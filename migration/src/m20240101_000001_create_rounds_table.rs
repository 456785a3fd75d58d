use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rounds::Sport).string().not_null())
                    .col(ColumnDef::new(Rounds::PlayDate).string().not_null())
                    .col(ColumnDef::new(Rounds::Player).text().not_null())
                    .col(ColumnDef::new(Rounds::Stats).text().not_null())
                    .col(
                        ColumnDef::new(Rounds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Rounds::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_rounds")
                            .col(Rounds::Sport)
                            .col(Rounds::PlayDate),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rounds::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Rounds {
    Table,
    Sport,
    PlayDate,
    Player,
    Stats,
    CreatedAt,
    UpdatedAt,
}
