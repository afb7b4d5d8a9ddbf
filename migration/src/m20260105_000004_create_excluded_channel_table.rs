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
                    .table(ExcludedChannel::Table)
                    .if_not_exists()
                    .col(pk_auto(ExcludedChannel::Id))
                    .col(string(ExcludedChannel::GuildId))
                    .col(string(ExcludedChannel::ChannelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_excluded_channel_guild_id")
                            .from(ExcludedChannel::Table, ExcludedChannel::GuildId)
                            .to(GuildSettings::Table, GuildSettings::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_excluded_channel_guild_id_channel_id")
                    .table(ExcludedChannel::Table)
                    .col(ExcludedChannel::GuildId)
                    .col(ExcludedChannel::ChannelId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExcludedChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExcludedChannel {
    Table,
    Id,
    GuildId,
    ChannelId,
}
