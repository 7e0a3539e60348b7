//! Handler for the designer theme catalog.

use axum::Json;
use nameplate_core::designer::themes::{theme_catalog, Theme};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;

/// GET /api/designer/themes
///
/// The static theme catalog: brand themes with their background template
/// references. The client renders these in the designer's theme picker.
pub async fn list_themes(
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<DataResponse<&'static [Theme]>>> {
    Ok(Json(DataResponse {
        data: theme_catalog(),
    }))
}
