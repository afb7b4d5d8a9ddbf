//! Test factories for creating Serenity API objects.
//!
//! These factories build valid Serenity structs by deserializing JSON, simulating
//! what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_member;
//!
//! let member = create_test_member(123456789, 200, Some("Marco"), &[111111111]);
//! ```

pub mod member;

pub use member::create_test_member;
