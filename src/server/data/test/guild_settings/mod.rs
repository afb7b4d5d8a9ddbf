use std::collections::BTreeSet;

use crate::server::{
    data::guild_settings::GuildSettingsRepository, error::AppError,
    model::guild_settings::ServerSettings,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod increment_rename_count;
mod update_name;
mod upsert;
