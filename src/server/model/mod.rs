//! Domain models shared by the store, services, bot and controllers.
//!
//! Models convert from SeaORM entities at the repository boundary (`from_entity`) and
//! into API DTOs at the controller boundary (`into_dto`).

pub mod custom_channel;
pub mod guild_settings;
pub mod identity;
pub mod nickname_pool;
pub mod user;
