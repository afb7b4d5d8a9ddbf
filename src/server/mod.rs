//! Discord bot, identity engine and web dashboard backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - Dashboard HTTP handlers, access control and DTO conversion
//! - **Bot Layer** (`bot/`) - Gateway event handlers, slash commands and the voice event dispatcher
//! - **Service Layer** (`service/`) - Identity engine, settings, nickname pool, custom channel and member nickname operations
//! - **Store Layer** (`store/`) - `ConfigStore` trait with in-memory and database backends
//! - **Data Layer** (`data/`) - SeaORM repositories and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, store, HTTP clients)
//! - **Startup** (`startup`) - Initialization of tracing, database, sessions and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job pruning stale pending restores
//!
//! # Event Flow
//!
//! 1. **Bot** receives a voice state update and classifies it into a `VoiceEvent`
//! 2. **Dispatcher** feeds events one at a time to the identity engine
//! 3. **Service** reads settings, custom channel rules and pool from the store, decides and renames through `MemberApi`
//! 4. **Store** records the pending restore and counts the rename

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod store;
pub mod util;
