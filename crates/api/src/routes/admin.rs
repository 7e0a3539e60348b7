//! Route definitions for admin-only endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::print;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST /print -> print_batch (admin only)
/// GET  /print -> list_printed (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/print", get(print::list_printed).post(print::print_batch))
}
