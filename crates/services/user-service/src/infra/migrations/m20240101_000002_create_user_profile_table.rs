//! Migration: Create the user_profile table.
//!
//! `user_id` is indexed but not unique; a user may own several profiles.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_user_table::VstoreUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfile::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProfile::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UserProfile::Name).string().not_null())
                    .col(ColumnDef::new(UserProfile::Photo).string().not_null())
                    .col(ColumnDef::new(UserProfile::Country).string().not_null())
                    .col(ColumnDef::new(UserProfile::Address).string().not_null())
                    .col(ColumnDef::new(UserProfile::Phone).string().not_null())
                    .col(
                        ColumnDef::new(UserProfile::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserProfile::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profile_user_id")
                            .from(UserProfile::Table, UserProfile::UserId)
                            .to(VstoreUser::Table, VstoreUser::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_profile_user_id")
                    .table(UserProfile::Table)
                    .col(UserProfile::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserProfile {
    Table,
    Id,
    UserId,
    Name,
    Photo,
    Country,
    Address,
    Phone,
    CreatedAt,
    UpdatedAt,
}
