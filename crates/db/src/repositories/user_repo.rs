//! Repository for the `users` table.

use nameplate_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, OfficerSummary, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, officer_name, email, password_hash, mobile_number, designation, \
                        area, delivery_office, address, profile_image, role, rmo, \
                        officer_number, is_active, last_login_at, login_count, \
                        created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Uniqueness of `email` and `officer_number` is enforced by the
    /// `uq_users_email` and `uq_users_officer_number` indexes; callers map
    /// the resulting `23505` to a conflict response.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (officer_name, email, password_hash, mobile_number, \
                                role, rmo, officer_number, designation)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.officer_name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.mobile_number)
            .bind(&input.role)
            .bind(&input.rmo)
            .bind(&input.officer_number)
            .bind(&input.designation)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Count users registered under a regional office.
    ///
    /// Registration uses this to derive the next officer number in the
    /// office's sequence.
    pub async fn count_by_rmo(pool: &PgPool, rmo: &str) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE rmo = $1")
            .bind(rmo)
            .fetch_one(pool)
            .await?;
        Ok(count.unwrap_or(0))
    }

    /// Record a successful login: bump `login_count` and stamp `last_login_at`.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                login_count = login_count + 1,
                last_login_at = NOW(),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List the distinct regional office codes that have registered users.
    pub async fn distinct_rmos(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT rmo FROM users ORDER BY rmo")
            .fetch_all(pool)
            .await
    }

    /// List officers registered under a regional office, oldest first.
    pub async fn officers_by_rmo(
        pool: &PgPool,
        rmo: &str,
    ) -> Result<Vec<OfficerSummary>, sqlx::Error> {
        sqlx::query_as::<_, OfficerSummary>(
            "SELECT id, officer_name, officer_number FROM users \
             WHERE rmo = $1 \
             ORDER BY created_at ASC, id ASC",
        )
        .bind(rmo)
        .fetch_all(pool)
        .await
    }
}
