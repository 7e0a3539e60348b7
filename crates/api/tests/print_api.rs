//! HTTP-level integration tests for the admin bulk print endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get_auth, post_json_auth};
use nameplate_core::roles::{ROLE_ADMIN, ROLE_OFFICER};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn print_body(rmo: &str, lot: &str, names: &[&str]) -> serde_json::Value {
    let records: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "houseName": name,
                "ownerName": "K. Menon",
                "spouseName": "L. Menon",
                "address": "12 Hill Road, Kochi",
                "imageUrl": format!("/files/{name}.png")
            })
        })
        .collect();
    serde_json::json!({
        "rmo": rmo,
        "officerId": "OFF11",
        "lot": lot,
        "records": records
    })
}

async fn printed_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM verified_nameplates")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Seed one unverified submission directly, returning its id.
async fn seed_submission(pool: &PgPool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO unverified_nameplates \
             (theme, background, house_name, owner_name, address, rmo, officer, lot, \
              officer_name, email) \
         VALUES ('classic', '/themes/classic/template-1.png', 'Rose Villa', 'K. Menon', \
                 '12 Hill Road', 'RMO1', 'OFF11', 'LOT-A', 'Anil Kumar', 'anil@test.com') \
         RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Print batch tests
// ---------------------------------------------------------------------------

/// A print batch of N records inserts exactly N print rows and leaves the
/// source submissions untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_print_batch_inserts_records(pool: PgPool) {
    let admin = common::seed_user(&pool, "admin@test.com", ROLE_ADMIN, "HQ").await;
    let token = common::token_for(&admin);
    let submission_id = seed_submission(&pool).await;

    let app = build_test_app(pool.clone());
    let body = print_body("RMO1", "LOT-A", &["Rose Villa", "Sea Breeze", "Hilltop"]);
    let response = post_json_auth(app, "/api/admin/print", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["inserted"], 3);
    assert_eq!(printed_count(&pool).await, 3);

    // Printing copies; the submission inbox is untouched.
    let (count, verified): (i64, bool) = sqlx::query_as(
        "SELECT COUNT(*), BOOL_OR(verified) FROM unverified_nameplates WHERE id = $1",
    )
    .bind(submission_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
    assert!(!verified);
}

/// Printing the same batch twice copies the records again.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_print_repeat_copies_again(pool: PgPool) {
    let admin = common::seed_user(&pool, "admin@test.com", ROLE_ADMIN, "HQ").await;
    let token = common::token_for(&admin);

    let body = print_body("RMO1", "LOT-A", &["Rose Villa"]);
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/admin/print", body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/admin/print", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    assert_eq!(printed_count(&pool).await, 2);
}

/// A batch missing its envelope fields is rejected whole, naming every
/// violation, with nothing inserted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_print_missing_envelope_rejected(pool: PgPool) {
    let admin = common::seed_user(&pool, "admin@test.com", ROLE_ADMIN, "HQ").await;
    let token = common::token_for(&admin);

    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/admin/print", serde_json::json!({}), &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    for expected in ["rmo is required", "lot is required", "records must be an array"] {
        assert!(
            message.contains(expected),
            "error should mention '{expected}', got: {message}"
        );
    }
    assert_eq!(printed_count(&pool).await, 0);
}

/// An empty records array is a valid batch that inserts nothing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_print_empty_batch(pool: PgPool) {
    let admin = common::seed_user(&pool, "admin@test.com", ROLE_ADMIN, "HQ").await;
    let token = common::token_for(&admin);

    let app = build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/admin/print", print_body("RMO1", "LOT-A", &[]), &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["inserted"], 0);
    assert_eq!(printed_count(&pool).await, 0);
}

/// Non-admin users are forbidden from printing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_print_requires_admin(pool: PgPool) {
    let officer = common::seed_user(&pool, "officer@test.com", ROLE_OFFICER, "RMO1").await;
    let token = common::token_for(&officer);

    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/admin/print",
        print_body("RMO1", "LOT-A", &["Rose Villa"]),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(printed_count(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// Print listing tests
// ---------------------------------------------------------------------------

/// The print listing filters by rmo and lot and paginates with hasMore.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_print_list_filters_and_pagination(pool: PgPool) {
    let admin = common::seed_user(&pool, "admin@test.com", ROLE_ADMIN, "HQ").await;
    let token = common::token_for(&admin);

    let app = build_test_app(pool.clone());
    let body = print_body("RMO1", "LOT-A", &["One", "Two", "Three"]);
    let response = post_json_auth(app, "/api/admin/print", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_test_app(pool.clone());
    let body = print_body("RMO2", "LOT-B", &["Four"]);
    let response = post_json_auth(app, "/api/admin/print", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/admin/print?rmo=RMO1&limit=2", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], 3);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["hasMore"], true);

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/admin/print?lot=LOT-B", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["house_name"], "Four");
    assert_eq!(json["hasMore"], false);
}
