use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_guild_settings_table::GuildSettings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PendingRestore::Table)
                    .if_not_exists()
                    .col(string(PendingRestore::GuildId))
                    .col(string(PendingRestore::UserId))
                    .col(string_null(PendingRestore::OriginalNickname))
                    .col(string(PendingRestore::OriginalDisplayName))
                    .col(string(PendingRestore::AssignedNickname))
                    .col(timestamp_with_time_zone(PendingRestore::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(PendingRestore::GuildId)
                            .col(PendingRestore::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pending_restore_guild_id")
                            .from(PendingRestore::Table, PendingRestore::GuildId)
                            .to(GuildSettings::Table, GuildSettings::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PendingRestore::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PendingRestore {
    Table,
    GuildId,
    UserId,
    OriginalNickname,
    OriginalDisplayName,
    AssignedNickname,
    CreatedAt,
}
