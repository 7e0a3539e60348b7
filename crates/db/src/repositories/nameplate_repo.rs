//! Repository for the `unverified_nameplates` table.

use nameplate_core::types::DbId;
use sqlx::PgPool;

use crate::models::nameplate::{CreateNameplate, LotSummary, NameplateFilter, UnverifiedNameplate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, theme, background, house_name, owner_name, address, \
                        house_name_color, house_name_size, owner_name_color, owner_name_size, \
                        address_color, address_size, rmo, officer, lot, officer_name, email, \
                        mobile_number, designation, image_url, verified, created_at, updated_at";

/// Provides CRUD operations for nameplate submissions.
pub struct NameplateRepo;

impl NameplateRepo {
    /// Insert a new submission, returning the created row.
    ///
    /// Duplicate payloads make duplicate rows; the table carries no
    /// uniqueness constraint across submissions.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNameplate,
    ) -> Result<UnverifiedNameplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO unverified_nameplates (
                theme, background, house_name, owner_name, address,
                house_name_color, house_name_size, owner_name_color, owner_name_size,
                address_color, address_size, rmo, officer, lot, officer_name, email,
                mobile_number, designation, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                     $11, $12, $13, $14, $15, $16, $17, $18, $19)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UnverifiedNameplate>(&query)
            .bind(&input.theme)
            .bind(&input.background)
            .bind(&input.house_name)
            .bind(&input.owner_name)
            .bind(&input.address)
            .bind(&input.house_name_color)
            .bind(input.house_name_size)
            .bind(&input.owner_name_color)
            .bind(input.owner_name_size)
            .bind(&input.address_color)
            .bind(input.address_size)
            .bind(&input.rmo)
            .bind(&input.officer)
            .bind(&input.lot)
            .bind(&input.officer_name)
            .bind(&input.email)
            .bind(&input.mobile_number)
            .bind(&input.designation)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UnverifiedNameplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM unverified_nameplates WHERE id = $1");
        sqlx::query_as::<_, UnverifiedNameplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List submissions matching the filter, newest first.
    ///
    /// `None` filter fields match everything.
    pub async fn list(
        pool: &PgPool,
        filter: &NameplateFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UnverifiedNameplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM unverified_nameplates \
             WHERE ($1::text IS NULL OR rmo = $1) \
               AND ($2::text IS NULL OR officer = $2) \
               AND ($3::boolean IS NULL OR verified = $3) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, UnverifiedNameplate>(&query)
            .bind(&filter.rmo)
            .bind(&filter.officer)
            .bind(filter.verified)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count submissions matching the filter.
    pub async fn count(pool: &PgPool, filter: &NameplateFilter) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM unverified_nameplates \
             WHERE ($1::text IS NULL OR rmo = $1) \
               AND ($2::text IS NULL OR officer = $2) \
               AND ($3::boolean IS NULL OR verified = $3)",
        )
        .bind(&filter.rmo)
        .bind(&filter.officer)
        .bind(filter.verified)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// List every submission in one lot, newest first.
    pub async fn list_for_lot(
        pool: &PgPool,
        rmo: &str,
        officer: &str,
        lot: &str,
    ) -> Result<Vec<UnverifiedNameplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM unverified_nameplates \
             WHERE rmo = $1 AND officer = $2 AND lot = $3 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, UnverifiedNameplate>(&query)
            .bind(rmo)
            .bind(officer)
            .bind(lot)
            .fetch_all(pool)
            .await
    }

    /// Flip a submission to verified, but only if it is not verified yet.
    ///
    /// The `verified = false` guard makes the flip a compare-and-set: a
    /// second verify of the same row matches nothing and returns `None`,
    /// so concurrent verifiers cannot both win. Callers distinguish the
    /// already-verified case from a missing row with [`Self::find_by_id`].
    pub async fn verify(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UnverifiedNameplate>, sqlx::Error> {
        let query = format!(
            "UPDATE unverified_nameplates \
             SET verified = TRUE, updated_at = NOW() \
             WHERE id = $1 AND verified = FALSE \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UnverifiedNameplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the lots an officer has submitted under, with per-lot counts.
    pub async fn lots_for_officer(
        pool: &PgPool,
        rmo: &str,
        officer: &str,
    ) -> Result<Vec<LotSummary>, sqlx::Error> {
        sqlx::query_as::<_, LotSummary>(
            "SELECT lot, COUNT(*) AS nameplate_count \
             FROM unverified_nameplates \
             WHERE rmo = $1 AND officer = $2 \
             GROUP BY lot \
             ORDER BY lot",
        )
        .bind(rmo)
        .bind(officer)
        .fetch_all(pool)
        .await
    }
}
