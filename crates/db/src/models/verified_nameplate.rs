//! Verified (print-ready) nameplate entity model and DTOs.

use nameplate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row from the `verified_nameplates` table. Immutable after insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VerifiedNameplate {
    pub id: DbId,
    pub rmo: String,
    pub officer_id: String,
    pub lot: String,
    pub house_name: String,
    pub owner_name: String,
    pub spouse_name: Option<String>,
    pub address: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// One record of an admin print batch.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrintRecord {
    pub house_name: String,
    pub owner_name: String,
    pub spouse_name: Option<String>,
    pub address: String,
    pub image_url: Option<String>,
}

/// Optional filters for print-collection listings.
#[derive(Debug, Clone, Default)]
pub struct PrintFilter {
    pub rmo: Option<String>,
    pub lot: Option<String>,
}
