//! Migration: Create the user_order table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserOrder::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserOrder::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserOrder::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(UserOrder::TotalPrice)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserOrder::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(UserOrder::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserOrder::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_order_user_id")
                            .from(UserOrder::Table, UserOrder::UserId)
                            .to(VstoreUser::Table, VstoreUser::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_order_user_id")
                    .table(UserOrder::Table)
                    .col(UserOrder::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserOrder::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserOrder {
    Table,
    Id,
    UserId,
    TotalPrice,
    Status,
    CreatedAt,
    UpdatedAt,
}

/// Owned by the user service; only the key is needed here.
#[derive(Iden)]
enum VstoreUser {
    Table,
    Id,
}
