use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "custom_channel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub channel_id: String,
    pub name: String,
    /// JSON array of `{"type": ..., "value": ...}` rules, applied in order.
    #[sea_orm(column_type = "Text")]
    pub rules: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guild_settings::Entity",
        from = "Column::GuildId",
        to = "super::guild_settings::Column::GuildId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GuildSettings,
}

impl Related<super::guild_settings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildSettings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
