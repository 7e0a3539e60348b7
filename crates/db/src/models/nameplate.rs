//! Unverified nameplate entity model and DTOs.

use nameplate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full nameplate submission row from the `unverified_nameplates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UnverifiedNameplate {
    pub id: DbId,
    pub theme: String,
    pub background: String,
    pub house_name: String,
    pub owner_name: String,
    pub address: String,
    pub house_name_color: String,
    pub house_name_size: i32,
    pub owner_name_color: String,
    pub owner_name_size: i32,
    pub address_color: String,
    pub address_size: i32,
    pub rmo: String,
    pub officer: String,
    pub lot: String,
    pub officer_name: String,
    pub email: String,
    pub mobile_number: Option<String>,
    pub designation: Option<String>,
    pub image_url: Option<String>,
    pub verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new submission. Always lands with `verified = false`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNameplate {
    pub theme: String,
    pub background: String,
    pub house_name: String,
    pub owner_name: String,
    pub address: String,
    pub house_name_color: String,
    pub house_name_size: i32,
    pub owner_name_color: String,
    pub owner_name_size: i32,
    pub address_color: String,
    pub address_size: i32,
    pub rmo: String,
    pub officer: String,
    pub lot: String,
    pub officer_name: String,
    pub email: String,
    pub mobile_number: Option<String>,
    pub designation: Option<String>,
    pub image_url: Option<String>,
}

/// Optional filters for submission listings. `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct NameplateFilter {
    pub rmo: Option<String>,
    pub officer: Option<String>,
    pub verified: Option<bool>,
}

/// Lot key with its submission count, for hierarchy listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LotSummary {
    pub lot: String,
    pub nameplate_count: i64,
}
