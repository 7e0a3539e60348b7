//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Filter / summary types used by the repositories

pub mod dashboard;
pub mod nameplate;
pub mod notification;
pub mod user;
pub mod verified_nameplate;
