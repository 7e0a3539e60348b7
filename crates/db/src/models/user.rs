//! User entity model and DTOs.

use nameplate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub officer_name: String,
    pub email: String,
    pub password_hash: String,
    pub mobile_number: String,
    pub designation: Option<String>,
    pub area: Option<String>,
    pub delivery_office: Option<String>,
    pub address: Option<String>,
    pub profile_image: Option<String>,
    pub role: String,
    pub rmo: String,
    pub officer_number: Option<String>,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub login_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub officer_name: String,
    pub email: String,
    pub mobile_number: String,
    pub designation: Option<String>,
    pub area: Option<String>,
    pub delivery_office: Option<String>,
    pub address: Option<String>,
    pub profile_image: Option<String>,
    pub role: String,
    pub rmo: String,
    pub officer_number: Option<String>,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub login_count: i32,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            officer_name: user.officer_name,
            email: user.email,
            mobile_number: user.mobile_number,
            designation: user.designation,
            area: user.area,
            delivery_office: user.delivery_office,
            address: user.address,
            profile_image: user.profile_image,
            role: user.role,
            rmo: user.rmo,
            officer_number: user.officer_number,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            login_count: user.login_count,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub officer_name: String,
    pub email: String,
    pub password_hash: String,
    pub mobile_number: String,
    pub role: String,
    pub rmo: String,
    pub officer_number: Option<String>,
    pub designation: Option<String>,
}

/// Compact officer row for hierarchy listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OfficerSummary {
    pub id: DbId,
    pub officer_name: String,
    pub officer_number: Option<String>,
}
