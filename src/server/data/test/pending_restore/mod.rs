use crate::server::{
    data::pending_restore::PendingRestoreRepository, error::AppError,
    model::identity::ActiveIdentity,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod delete_older_than;
mod get_by_guild_id;
mod update_original_nickname;
mod upsert;
