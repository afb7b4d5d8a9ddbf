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
                    .table(CustomChannel::Table)
                    .if_not_exists()
                    .col(string(CustomChannel::GuildId))
                    .col(string(CustomChannel::ChannelId))
                    .col(string(CustomChannel::Name))
                    .col(text(CustomChannel::Rules))
                    .col(timestamp_with_time_zone(CustomChannel::CreatedAt))
                    .col(timestamp_with_time_zone(CustomChannel::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(CustomChannel::GuildId)
                            .col(CustomChannel::ChannelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_custom_channel_guild_id")
                            .from(CustomChannel::Table, CustomChannel::GuildId)
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
            .drop_table(Table::drop().table(CustomChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomChannel {
    Table,
    GuildId,
    ChannelId,
    Name,
    Rules,
    CreatedAt,
    UpdatedAt,
}
