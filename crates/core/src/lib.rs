//! Pure domain logic for the nameplate program.
//!
//! Everything in this crate is in-memory and database-free: the designer
//! draft store, submission validation, naming conventions, role constants,
//! shared types, and the domain error enum. The `nameplate-db` and
//! `nameplate-api` crates build on these.

pub mod designer;
pub mod error;
pub mod naming;
pub mod roles;
pub mod types;
pub mod validation;
