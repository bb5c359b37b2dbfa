//! # Shared Data Transfer Objects Library
//!
//! This library defines the row and request types exchanged with the hosted
//! backend, shared between the web frontend and any tooling that talks to the
//! same tables. All types use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the remote tables and auth API
//!   - **[`dto::auth`]**: credentials, sessions, users, profiles
//!   - **[`dto::market`]**: items and price observations
//!   - **[`dto::forum`]**: posts and comments
//! - **[`utils`]**: shared display-format helpers
//!
//! ## Wire Format
//!
//! All DTOs serialize with default `serde` behavior:
//! - Field names are **snake_case** in Rust and in JSON, matching the remote
//!   table columns
//! - Optional columns are omitted from insert payloads when `None`
//! - Unknown fields in responses are ignored, so widening a remote `select`
//!   never breaks deserialization

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
