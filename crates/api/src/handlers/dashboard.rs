//! Handler for the dashboard stats endpoint.

use axum::extract::State;
use axum::Json;
use nameplate_db::models::dashboard::DashboardStats;
use nameplate_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/dashboard/stats
///
/// Aggregate counts for the landing dashboard: active regional offices,
/// officers, officers per office, and the nameplate pipeline totals. Each
/// figure comes from one grouped query rather than per-office fan-out.
pub async fn stats(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardStats>>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}
