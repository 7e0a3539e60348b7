//! Handler for nameplate image uploads.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use image::ImageFormat;
use nameplate_core::error::CoreError;
use nameplate_core::naming;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// Response body for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// POST /api/upload
///
/// Accept a rendered nameplate image as a multipart `file` field, sniff the
/// format, and store it under a generated object name. Returns the public
/// URL for the client to attach to its record submission.
pub async fn upload(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let store = state.object_store.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("Object storage is not configured".into())
    })?;

    // 1. Pull the `file` field out of the multipart body.
    let mut bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
            bytes = Some(data.to_vec());
            break;
        }
    }
    let bytes =
        bytes.ok_or_else(|| AppError::BadRequest("Missing 'file' multipart field".into()))?;

    // 2. Sniff the content; only raster formats the print pipeline handles
    //    are accepted.
    let format = image::guess_format(&bytes)
        .map_err(|_| AppError::Core(CoreError::Validation("Unrecognized image format".into())))?;
    if !matches!(
        format,
        ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::WebP
    ) {
        return Err(AppError::Core(CoreError::Validation(
            "Image must be PNG, JPEG, or WebP".into(),
        )));
    }

    // 3. Store under a generated object name.
    let identifier = user
        .officer_number
        .clone()
        .unwrap_or_else(|| user.user_id.to_string());
    let object_name =
        naming::nameplate_object_name(&identifier, chrono::Utc::now().timestamp_millis());

    let image_url = store
        .save(&object_name, &bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(
        object_name = %object_name,
        size_bytes = bytes.len(),
        user_id = user.user_id,
        "Image uploaded",
    );

    Ok((StatusCode::CREATED, Json(UploadResponse { image_url })))
}
