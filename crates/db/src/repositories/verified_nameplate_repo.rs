//! Repository for the `verified_nameplates` table.

use sqlx::PgPool;

use crate::models::verified_nameplate::{CreatePrintRecord, PrintFilter, VerifiedNameplate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, rmo, officer_id, lot, house_name, owner_name, spouse_name, \
                        address, image_url, created_at";

/// Provides insert and listing operations for the print-ready collection.
pub struct VerifiedNameplateRepo;

impl VerifiedNameplateRepo {
    /// Insert a print batch inside a single transaction.
    ///
    /// All records share the batch's `rmo`, `officer_id` and `lot`. Either
    /// every record lands or none do; a failure part-way through rolls the
    /// whole batch back. Returns the number of rows inserted.
    pub async fn insert_batch(
        pool: &PgPool,
        rmo: &str,
        officer_id: &str,
        lot: &str,
        records: &[CreatePrintRecord],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        for record in records {
            sqlx::query(
                "INSERT INTO verified_nameplates \
                     (rmo, officer_id, lot, house_name, owner_name, spouse_name, address, image_url) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            )
            .bind(rmo)
            .bind(officer_id)
            .bind(lot)
            .bind(&record.house_name)
            .bind(&record.owner_name)
            .bind(&record.spouse_name)
            .bind(&record.address)
            .bind(&record.image_url)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(records.len() as u64)
    }

    /// List print records matching the filter, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &PrintFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<VerifiedNameplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM verified_nameplates \
             WHERE ($1::text IS NULL OR rmo = $1) \
               AND ($2::text IS NULL OR lot = $2) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, VerifiedNameplate>(&query)
            .bind(&filter.rmo)
            .bind(&filter.lot)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count print records matching the filter.
    pub async fn count(pool: &PgPool, filter: &PrintFilter) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM verified_nameplates \
             WHERE ($1::text IS NULL OR rmo = $1) \
               AND ($2::text IS NULL OR lot = $2)",
        )
        .bind(&filter.rmo)
        .bind(&filter.lot)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
