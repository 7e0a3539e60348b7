//! Route definitions for the `/rmo` hierarchy.
//!
//! All endpoints require authentication; the verify flip additionally
//! requires the `rmo` or `admin` role (enforced in the handler extractor).

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::rmo;
use crate::state::AppState;

/// Routes mounted at `/rmo`.
///
/// ```text
/// GET   /                                                -> list_rmos
/// GET   /{rmo}/officers                                  -> list_officers
/// GET   /{rmo}/officers/{officer}/lots                   -> list_lots
/// GET   /{rmo}/officers/{officer}/lots/{lot}             -> list_lot_nameplates
/// PATCH /{rmo}/officers/{officer}/lots/{lot}/nameplates/{id}/verify -> verify_nameplate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rmo::list_rmos))
        .route("/{rmo}/officers", get(rmo::list_officers))
        .route("/{rmo}/officers/{officer}/lots", get(rmo::list_lots))
        .route(
            "/{rmo}/officers/{officer}/lots/{lot}",
            get(rmo::list_lot_nameplates),
        )
        .route(
            "/{rmo}/officers/{officer}/lots/{lot}/nameplates/{id}/verify",
            patch(rmo::verify_nameplate),
        )
}
