use crate::server::{
    data::custom_channel::CustomChannelRepository,
    error::{internal::InternalError, AppError},
    model::custom_channel::{ChannelRule, CustomChannel},
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find;
mod upsert;
