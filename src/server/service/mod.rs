//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! surfaces (HTTP controllers, slash commands, gateway events) and the configuration
//! store. Services are responsible for:
//!
//! - **Business Logic**: Validation and the rules of the identity engine
//! - **Orchestration**: Lazy creation of guild settings and default pools
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod custom_channel;
pub mod identity;
pub mod member;
pub mod member_nickname;
pub mod nickname;
pub mod settings;

#[cfg(test)]
pub(crate) mod test;
