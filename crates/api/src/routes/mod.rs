pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod designer;
pub mod health;
pub mod notification;
pub mod rmo;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/me                                         current user (requires auth)
/// /auth/logout                                     logout (requires auth)
///
/// /{officer}/lots/{lot}/createNameplate            submit nameplate (POST, auth)
/// /unverify                                        filtered submission list (GET, auth)
///
/// /rmo                                             distinct RMO codes
/// /rmo/{rmo}/officers                              officers of one RMO
/// /rmo/{rmo}/officers/{officer}/lots               lots with counts
/// /rmo/{rmo}/officers/{officer}/lots/{lot}         lot records
/// /rmo/.../lots/{lot}/nameplates/{id}/verify       verify flip (PATCH, rmo|admin)
///
/// /admin/print                                     print batch (POST), list (GET) -- admin
///
/// /upload                                          image upload (POST, multipart, auth)
///
/// /notifications                                   list (GET), append (POST) -- auth
///
/// /dashboard/stats                                 aggregate counts (GET, auth)
///
/// /designer/themes                                 theme catalog (GET, auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, me, logout).
        .nest("/auth", auth::router())
        // Nameplate submission + unverified listing.
        .route(
            "/{officer}/lots/{lot}/createNameplate",
            post(handlers::nameplate::create_nameplate),
        )
        .route("/unverify", get(handlers::nameplate::list_unverified))
        // Regional office hierarchy and verification.
        .nest("/rmo", rmo::router())
        // Admin bulk print.
        .nest("/admin", admin::router())
        // Image upload.
        .route("/upload", post(handlers::upload::upload))
        // Notification feed.
        .nest("/notifications", notification::router())
        // Dashboard aggregates.
        .nest("/dashboard", dashboard::router())
        // Designer theme catalog.
        .nest("/designer", designer::router())
}
