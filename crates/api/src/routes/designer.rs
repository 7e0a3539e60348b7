//! Route definitions for the `/designer` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::designer;
use crate::state::AppState;

/// Routes mounted at `/designer`.
///
/// ```text
/// GET /themes -> list_themes
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/themes", get(designer::list_themes))
}
