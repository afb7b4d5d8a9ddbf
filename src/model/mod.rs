//! Data transfer objects shared by the dashboard API.
//!
//! These types define the JSON bodies accepted and returned by the HTTP endpoints.
//! Discord snowflakes are serialized as strings since they exceed the integer range
//! JavaScript clients can represent.

pub mod api;
pub mod custom_channel;
pub mod id;
pub mod member_nickname;
pub mod nickname;
pub mod settings;
pub mod user;
