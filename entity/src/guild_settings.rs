use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub name: String,
    pub enabled: bool,
    pub restore_on_leave: bool,
    pub immunity_role_id: Option<String>,
    pub rename_count: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::nickname::Entity")]
    Nickname,
    #[sea_orm(has_many = "super::excluded_channel::Entity")]
    ExcludedChannel,
    #[sea_orm(has_many = "super::pending_restore::Entity")]
    PendingRestore,
    #[sea_orm(has_many = "super::custom_channel::Entity")]
    CustomChannel,
}

impl Related<super::nickname::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Nickname.def()
    }
}

impl Related<super::excluded_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExcludedChannel.def()
    }
}

impl Related<super::pending_restore::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PendingRestore.def()
    }
}

impl Related<super::custom_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomChannel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
