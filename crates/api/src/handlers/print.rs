//! Handlers for the admin bulk print endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nameplate_core::error::CoreError;
use nameplate_db::models::verified_nameplate::{CreatePrintRecord, PrintFilter, VerifiedNameplate};
use nameplate_db::repositories::VerifiedNameplateRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::PageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/print`.
///
/// Every field is optional at the parse level so an incomplete batch is
/// rejected with a proper validation message instead of a deserialization
/// error.
#[derive(Debug, Deserialize)]
pub struct PrintRequest {
    pub rmo: Option<String>,
    #[serde(rename = "officerId")]
    pub officer_id: Option<String>,
    pub lot: Option<String>,
    pub records: Option<Vec<PrintRecordInput>>,
}

/// One record of a print batch, in client field names.
#[derive(Debug, Deserialize)]
pub struct PrintRecordInput {
    #[serde(rename = "houseName")]
    pub house_name: Option<String>,
    #[serde(rename = "ownerName")]
    pub owner_name: Option<String>,
    #[serde(rename = "spouseName")]
    pub spouse_name: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Response body for a successful print batch.
#[derive(Debug, Serialize)]
pub struct PrintResponse {
    pub inserted: u64,
}

/// Query parameters for `GET /admin/print`.
#[derive(Debug, Deserialize)]
pub struct PrintListQuery {
    pub rmo: Option<String>,
    pub lot: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/admin/print
///
/// Copy a batch of verified records into the print-ready collection inside
/// one transaction. The source rows are never touched, so a repeat print
/// copies them again.
pub async fn print_batch(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<PrintRequest>,
) -> AppResult<impl IntoResponse> {
    // 1. Validate the batch envelope. A bad envelope rejects the whole
    //    batch before anything is written.
    let mut errors = Vec::new();
    if input.rmo.as_deref().map_or(true, |s| s.trim().is_empty()) {
        errors.push("rmo is required");
    }
    if input.lot.as_deref().map_or(true, |s| s.trim().is_empty()) {
        errors.push("lot is required");
    }
    if input.records.is_none() {
        errors.push("records must be an array");
    }
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors.join("; "))));
    }

    let rmo = input.rmo.unwrap_or_default();
    let officer_id = input.officer_id.unwrap_or_default();
    let lot = input.lot.unwrap_or_default();
    let records: Vec<CreatePrintRecord> = input
        .records
        .unwrap_or_default()
        .into_iter()
        .map(|r| CreatePrintRecord {
            house_name: r.house_name.unwrap_or_default(),
            owner_name: r.owner_name.unwrap_or_default(),
            spouse_name: r.spouse_name,
            address: r.address.unwrap_or_default(),
            image_url: r.image_url,
        })
        .collect();

    // 2. Insert all records or none.
    let inserted =
        VerifiedNameplateRepo::insert_batch(&state.pool, &rmo, &officer_id, &lot, &records).await?;

    tracing::info!(
        inserted,
        rmo = %rmo,
        lot = %lot,
        admin_id = admin.user_id,
        "Print batch inserted",
    );

    Ok((StatusCode::CREATED, Json(PrintResponse { inserted })))
}

/// GET /api/admin/print
///
/// Paginated listing of the print-ready collection for the admin UI.
pub async fn list_printed(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<PrintListQuery>,
) -> AppResult<Json<PageResponse<VerifiedNameplate>>> {
    let limit = nameplate_db::clamp_limit(query.limit);
    let offset = nameplate_db::clamp_offset(query.offset);

    let filter = PrintFilter {
        rmo: query.rmo,
        lot: query.lot,
    };

    let data = VerifiedNameplateRepo::list(&state.pool, &filter, limit, offset).await?;
    let total = VerifiedNameplateRepo::count(&state.pool, &filter).await?;
    let has_more = offset + (data.len() as i64) < total;

    Ok(Json(PageResponse {
        data,
        total,
        has_more,
    }))
}
