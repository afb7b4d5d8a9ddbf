//! HTTP handlers of the web dashboard.
//!
//! Every handler authenticates through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! delegates to a service and converts the resulting domain model into a DTO.

pub mod auth;
pub mod custom_channel;
pub mod excluded_channel;
pub mod guild;
pub mod member_nickname;
pub mod nickname;
