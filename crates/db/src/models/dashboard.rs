//! Aggregate types backing the dashboard stats endpoint.

use serde::Serialize;
use sqlx::FromRow;

/// Officer head-count for one regional office.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RmoOfficerCount {
    pub rmo: String,
    pub officer_count: i64,
}

/// Nameplate pipeline totals across the three lifecycle stages.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineCounts {
    pub unverified: i64,
    pub verified: i64,
    pub printed: i64,
}

/// Full dashboard stats payload.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub rmo_count: i64,
    pub officer_count: i64,
    pub officers_per_rmo: Vec<RmoOfficerCount>,
    pub nameplates: PipelineCounts,
}
