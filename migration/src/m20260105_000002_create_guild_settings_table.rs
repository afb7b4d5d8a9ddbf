use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSettings::Table)
                    .if_not_exists()
                    .col(string(GuildSettings::GuildId).primary_key())
                    .col(string(GuildSettings::Name))
                    .col(boolean(GuildSettings::Enabled).default(true))
                    .col(boolean(GuildSettings::RestoreOnLeave).default(false))
                    .col(string_null(GuildSettings::ImmunityRoleId))
                    .col(big_integer(GuildSettings::RenameCount).default(0))
                    .col(timestamp_with_time_zone(GuildSettings::CreatedAt))
                    .col(timestamp_with_time_zone(GuildSettings::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildSettings {
    Table,
    GuildId,
    Name,
    Enabled,
    RestoreOnLeave,
    ImmunityRoleId,
    RenameCount,
    CreatedAt,
    UpdatedAt,
}
