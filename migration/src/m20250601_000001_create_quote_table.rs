use sea_orm_migration::{prelude::*, schema::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite's CURRENT_TIMESTAMP has whole-second resolution
        let created_at_default = match manager.get_database_backend() {
            DatabaseBackend::Sqlite => Expr::cust("(strftime('%Y-%m-%d %H:%M:%f', 'now'))"),
            _ => Expr::current_timestamp().into(),
        };

        manager
            .create_table(
                Table::create()
                    .table(Quote::Table)
                    .if_not_exists()
                    .col(pk_auto(Quote::Id))
                    .col(string(Quote::Author))
                    .col(text(Quote::Text))
                    .col(
                        timestamp_with_time_zone(Quote::CreatedAt)
                            .default(created_at_default),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quote_author")
                    .table(Quote::Table)
                    .col(Quote::Author)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_quote_author")
                    .table(Quote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Quote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quote {
    Table,
    Id,
    Author,
    Text,
    CreatedAt,
}
