//! Handlers for the `/notifications` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nameplate_db::models::notification::{CreateNotification, Notification};
use nameplate_db::repositories::NotificationRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/notifications
///
/// Global feed, newest first, paginated.
pub async fn list_notifications(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let limit = nameplate_db::clamp_limit(params.limit);
    let offset = nameplate_db::clamp_offset(params.offset);

    let notifications = NotificationRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// POST /api/notifications
///
/// Append one notification to the feed. `type` defaults to `info`.
pub async fn create_notification(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateNotification>,
) -> AppResult<impl IntoResponse> {
    let notification = NotificationRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: notification }),
    ))
}
