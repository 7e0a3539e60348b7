//! Handlers for nameplate submissions (create + unverified listing).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nameplate_core::designer::{
    self, NameplateDraft, DEFAULT_ADDRESS_SIZE, DEFAULT_HOUSE_NAME_SIZE, DEFAULT_OWNER_NAME_SIZE,
    DEFAULT_TEXT_COLOR,
};
use nameplate_core::error::CoreError;
use nameplate_db::models::nameplate::{CreateNameplate, NameplateFilter, UnverifiedNameplate};
use nameplate_db::repositories::NameplateRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /{officer}/lots/{lot}/createNameplate`.
///
/// Field names follow the client payload: display fields are camelCase,
/// `officer_name` and `email` are snake_case. Every field is optional at
/// the parse level so validation can report all missing fields at once.
#[derive(Debug, Deserialize)]
pub struct CreateNameplateRequest {
    pub theme: Option<String>,
    pub background: Option<String>,
    #[serde(rename = "houseName")]
    pub house_name: Option<String>,
    #[serde(rename = "ownerName")]
    pub owner_name: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "houseNameColor")]
    pub house_name_color: Option<String>,
    #[serde(rename = "houseNameSize")]
    pub house_name_size: Option<i32>,
    #[serde(rename = "ownerNameColor")]
    pub owner_name_color: Option<String>,
    #[serde(rename = "ownerNameSize")]
    pub owner_name_size: Option<i32>,
    #[serde(rename = "addressColor")]
    pub address_color: Option<String>,
    #[serde(rename = "addressSize")]
    pub address_size: Option<i32>,
    pub rmo: Option<String>,
    pub officer_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: Option<String>,
    pub designation: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Query parameters for `GET /unverify`.
#[derive(Debug, Deserialize)]
pub struct UnverifiedQuery {
    pub rmo: Option<String>,
    pub officer: Option<String>,
    pub verified: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/{officer}/lots/{lot}/createNameplate
///
/// Validate a draft submission and persist it with `verified = false`.
/// Missing required fields are all reported in a single 400 response and
/// nothing is written in that case. The path's officer and lot override any
/// values in the body.
pub async fn create_nameplate(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path((officer, lot)): Path<(String, String)>,
    Json(input): Json<CreateNameplateRequest>,
) -> AppResult<impl IntoResponse> {
    // 1. Assemble the draft; absent fields stay empty so validation names
    //    every missing one.
    let draft = NameplateDraft {
        id: 0,
        theme: input.theme.unwrap_or_default(),
        background: input.background.unwrap_or_default(),
        house_name: input.house_name.unwrap_or_default(),
        owner_name: input.owner_name.unwrap_or_default(),
        address: input.address.unwrap_or_default(),
        house_name_color: input
            .house_name_color
            .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
        house_name_size: input.house_name_size.unwrap_or(DEFAULT_HOUSE_NAME_SIZE),
        owner_name_color: input
            .owner_name_color
            .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
        owner_name_size: input.owner_name_size.unwrap_or(DEFAULT_OWNER_NAME_SIZE),
        address_color: input
            .address_color
            .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
        address_size: input.address_size.unwrap_or(DEFAULT_ADDRESS_SIZE),
        rmo: input.rmo.unwrap_or_default(),
        officer,
        lot,
        officer_name: input.officer_name.unwrap_or_default(),
        email: input.email.unwrap_or_default(),
        mobile_number: input.mobile_number.unwrap_or_default(),
        designation: input.designation.unwrap_or_default(),
    };

    // 2. Validate; every violation is reported.
    let violations = designer::validate(&draft);
    if !violations.is_empty() {
        return Err(AppError::Core(CoreError::Validation(violations.join("; "))));
    }

    // 3. Persist. `verified` and timestamps are server-assigned.
    let create = CreateNameplate {
        theme: draft.theme,
        background: draft.background,
        house_name: draft.house_name,
        owner_name: draft.owner_name,
        address: draft.address,
        house_name_color: draft.house_name_color,
        house_name_size: draft.house_name_size,
        owner_name_color: draft.owner_name_color,
        owner_name_size: draft.owner_name_size,
        address_color: draft.address_color,
        address_size: draft.address_size,
        rmo: draft.rmo,
        officer: draft.officer,
        lot: draft.lot,
        officer_name: draft.officer_name,
        email: draft.email,
        mobile_number: (!draft.mobile_number.is_empty()).then_some(draft.mobile_number),
        designation: (!draft.designation.is_empty()).then_some(draft.designation),
        image_url: input.image_url,
    };
    let nameplate = NameplateRepo::create(&state.pool, &create).await?;

    tracing::info!(
        nameplate_id = nameplate.id,
        rmo = %nameplate.rmo,
        officer = %nameplate.officer,
        lot = %nameplate.lot,
        "Nameplate submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: nameplate }),
    ))
}

/// GET /api/unverify
///
/// Filtered, paginated listing of submissions, newest first. Despite the
/// route name the `verified` filter is optional, so the same endpoint also
/// serves verified-only views.
pub async fn list_unverified(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<UnverifiedQuery>,
) -> AppResult<Json<PageResponse<UnverifiedNameplate>>> {
    let limit = nameplate_db::clamp_limit(query.limit);
    let offset = nameplate_db::clamp_offset(query.offset);

    let filter = NameplateFilter {
        rmo: query.rmo,
        officer: query.officer,
        verified: query.verified,
    };

    let data = NameplateRepo::list(&state.pool, &filter, limit, offset).await?;
    let total = NameplateRepo::count(&state.pool, &filter).await?;
    let has_more = offset + (data.len() as i64) < total;

    Ok(Json(PageResponse {
        data,
        total,
        has_more,
    }))
}
