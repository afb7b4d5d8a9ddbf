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
                    .table(Nickname::Table)
                    .if_not_exists()
                    .col(pk_auto(Nickname::Id))
                    .col(string(Nickname::GuildId))
                    .col(string_len(Nickname::Nickname, 32))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nickname_guild_id")
                            .from(Nickname::Table, Nickname::GuildId)
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
                    .name("idx_nickname_guild_id_nickname")
                    .table(Nickname::Table)
                    .col(Nickname::GuildId)
                    .col(Nickname::Nickname)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Nickname::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Nickname {
    Table,
    Id,
    GuildId,
    Nickname,
}
