//! Well-known role name constants.
//!
//! `admin` and `rmo` accounts are provisioned out of band; registration
//! always creates `officer` accounts.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_RMO: &str = "rmo";
pub const ROLE_OFFICER: &str = "officer";
