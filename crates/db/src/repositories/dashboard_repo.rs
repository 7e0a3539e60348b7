//! Aggregate queries backing the dashboard stats endpoint.

use sqlx::PgPool;

use crate::models::dashboard::{DashboardStats, PipelineCounts, RmoOfficerCount};

/// Provides read-only aggregate queries over the whole schema.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Collect the full dashboard stats payload.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let rmo_count: Option<i64> = sqlx::query_scalar("SELECT COUNT(DISTINCT rmo) FROM users")
            .fetch_one(pool)
            .await?;
        let officer_count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        let officers_per_rmo = sqlx::query_as::<_, RmoOfficerCount>(
            "SELECT rmo, COUNT(*) AS officer_count FROM users GROUP BY rmo ORDER BY rmo",
        )
        .fetch_all(pool)
        .await?;

        let unverified: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM unverified_nameplates WHERE verified = FALSE",
        )
        .fetch_one(pool)
        .await?;
        let verified: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM unverified_nameplates WHERE verified = TRUE",
        )
        .fetch_one(pool)
        .await?;
        let printed: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM verified_nameplates")
            .fetch_one(pool)
            .await?;

        Ok(DashboardStats {
            rmo_count: rmo_count.unwrap_or(0),
            officer_count: officer_count.unwrap_or(0),
            officers_per_rmo,
            nameplates: PipelineCounts {
                unverified: unverified.unwrap_or(0),
                verified: verified.unwrap_or(0),
                printed: printed.unwrap_or(0),
            },
        })
    }
}
