use crate::server::{
    bot::command::{execute, BotCommand},
    error::{nickname::NicknameError, settings::SettingsError, AppError},
    model::nickname_pool::DEFAULT_NICKNAMES,
    store::{memory::MemoryStore, ConfigStore},
};
