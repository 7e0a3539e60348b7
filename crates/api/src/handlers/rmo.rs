//! Handlers for the regional-office hierarchy (`/rmo`) and verification.

use axum::extract::{Path, State};
use axum::Json;
use nameplate_core::error::CoreError;
use nameplate_core::types::DbId;
use nameplate_db::models::nameplate::{LotSummary, UnverifiedNameplate};
use nameplate_db::models::user::OfficerSummary;
use nameplate_db::repositories::{NameplateRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireRmo};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/rmo
///
/// Distinct regional office codes that have registered users.
pub async fn list_rmos(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let rmos = UserRepo::distinct_rmos(&state.pool).await?;
    Ok(Json(DataResponse { data: rmos }))
}

/// GET /api/rmo/{rmo}/officers
///
/// Officers registered under one regional office.
pub async fn list_officers(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(rmo): Path<String>,
) -> AppResult<Json<DataResponse<Vec<OfficerSummary>>>> {
    let officers = UserRepo::officers_by_rmo(&state.pool, &rmo).await?;
    Ok(Json(DataResponse { data: officers }))
}

/// GET /api/rmo/{rmo}/officers/{officer}/lots
///
/// Lot keys discovered by grouping the officer's submissions, with per-lot
/// counts.
pub async fn list_lots(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path((rmo, officer)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<Vec<LotSummary>>>> {
    let lots = NameplateRepo::lots_for_officer(&state.pool, &rmo, &officer).await?;
    Ok(Json(DataResponse { data: lots }))
}

/// GET /api/rmo/{rmo}/officers/{officer}/lots/{lot}
///
/// Every submission in one lot, newest first.
pub async fn list_lot_nameplates(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path((rmo, officer, lot)): Path<(String, String, String)>,
) -> AppResult<Json<DataResponse<Vec<UnverifiedNameplate>>>> {
    let nameplates = NameplateRepo::list_for_lot(&state.pool, &rmo, &officer, &lot).await?;
    Ok(Json(DataResponse { data: nameplates }))
}

/// PATCH /api/rmo/{rmo}/officers/{officer}/lots/{lot}/nameplates/{id}/verify
///
/// Flip one submission to verified. The compare-and-set update matches
/// nothing when the row is missing or already verified; a follow-up lookup
/// distinguishes 404 from 409.
pub async fn verify_nameplate(
    RequireRmo(user): RequireRmo,
    State(state): State<AppState>,
    Path((_rmo, _officer, _lot, id)): Path<(String, String, String, DbId)>,
) -> AppResult<Json<DataResponse<UnverifiedNameplate>>> {
    match NameplateRepo::verify(&state.pool, id).await? {
        Some(nameplate) => {
            tracing::info!(
                nameplate_id = nameplate.id,
                verified_by = user.user_id,
                "Nameplate verified",
            );
            Ok(Json(DataResponse { data: nameplate }))
        }
        None => match NameplateRepo::find_by_id(&state.pool, id).await? {
            Some(_) => Err(AppError::Core(CoreError::Conflict(
                "Nameplate is already verified".into(),
            ))),
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "Nameplate",
                id,
            })),
        },
    }
}
