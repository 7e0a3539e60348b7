//! Notification feed entity model and DTOs.

use nameplate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row from the `notifications` table. The feed is append-only; there is
/// no read/unread state.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub message: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for appending a notification.
#[derive(Debug, Deserialize)]
pub struct CreateNotification {
    pub message: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(rename = "userId")]
    pub user_id: DbId,
}

fn default_kind() -> String {
    "info".to_string()
}
