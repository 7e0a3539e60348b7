//! Handlers for the `/auth` resource (register, login, me, logout).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use nameplate_core::error::CoreError;
use nameplate_core::roles::ROLE_OFFICER;
use nameplate_core::{naming, validation};
use serde::{Deserialize, Serialize};
use nameplate_db::models::user::{CreateUser, UserResponse};
use nameplate_db::repositories::UserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::password::MIN_PASSWORD_LENGTH;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, TOKEN_COOKIE};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
///
/// Field names follow the client payload (camelCase).
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "officerName")]
    pub officer_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub rmo: String,
    /// Defaults to `officer` when omitted.
    pub role: Option<String>,
    pub designation: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Register a new officer. The officer number is derived from the regional
/// office code plus the office's registration sequence, so the first
/// registrant under `RMO1` becomes `OFF11`.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    // 1. Validate the payload.
    validate_register(&input)?;

    // 2. Derive the next officer number in this office's sequence.
    //    Two racing registrations can derive the same number; the second
    //    insert then trips uq_users_officer_number and returns 409.
    let sequence = UserRepo::count_by_rmo(&state.pool, &input.rmo).await? + 1;
    let officer_number = naming::officer_number(&input.rmo, sequence);

    // 3. Hash the password.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // 4. Insert. Duplicate email or officer number maps to 409 via the
    //    uq_ constraint classification.
    let role = input.role.unwrap_or_else(|| ROLE_OFFICER.to_string());
    let create = CreateUser {
        officer_name: input.officer_name,
        email: input.email,
        password_hash,
        mobile_number: input.mobile_number,
        role,
        rmo: input.rmo,
        officer_number: Some(officer_number),
        designation: input.designation,
    };
    let user = UserRepo::create(&state.pool, &create).await?;

    tracing::info!(
        user_id = user.id,
        officer_number = ?user.officer_number,
        rmo = %user.rmo,
        "User registered",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns the JWT in the response body
/// and sets it as an HTTP-only session cookie for browser clients.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    // 1. Find user by email.
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    // 2. Check if the account is active.
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 3. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // 4. Record the login (bumps login_count, stamps last_login_at).
    UserRepo::record_login(&state.pool, user.id).await?;

    // 5. Generate the token and session cookie.
    let token = generate_token(
        user.id,
        &user.role,
        user.officer_number.as_deref(),
        Some(&user.rmo),
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let expires_in = state.config.jwt.token_expiry_hours * 3600;
    let cookie = session_cookie(&token, expires_in);

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthResponse {
            token,
            expires_in,
            user: UserResponse::from(user),
        }),
    ))
}

/// GET /api/auth/me
///
/// Return the authenticated user's profile.
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// POST /api/auth/logout
///
/// Clear the session cookie. Returns 204 No Content. Tokens held by API
/// clients simply expire; there is no server-side session to revoke.
pub async fn logout(_auth_user: AuthUser) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the HTTP-only session cookie carrying the JWT.
fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{TOKEN_COOKIE}={token}; HttpOnly; SameSite=Strict; Path=/; Max-Age={max_age_secs}")
}

/// Build an expired cookie that clears the session in the browser.
fn clear_session_cookie() -> String {
    format!("{TOKEN_COOKIE}=; HttpOnly; SameSite=Strict; Path=/; Max-Age=0")
}

/// Validate a registration payload, collecting every violation.
fn validate_register(input: &RegisterRequest) -> AppResult<()> {
    let mut errors = Vec::new();

    if input.officer_name.trim().is_empty() {
        errors.push("officer_name is required".to_string());
    }
    if input.email.trim().is_empty() {
        errors.push("email is required".to_string());
    } else if !validation::is_valid_email(&input.email) {
        errors.push("Invalid email format".to_string());
    }
    if input.rmo.trim().is_empty() {
        errors.push("rmo is required".to_string());
    }
    if input.mobile_number.trim().is_empty() {
        errors.push("mobile_number is required".to_string());
    } else if !validation::is_valid_mobile(&input.mobile_number) {
        errors.push("Mobile number must be 10-15 digits".to_string());
    }
    if let Err(msg) = validate_password_strength(&input.password, MIN_PASSWORD_LENGTH) {
        errors.push(msg);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(errors.join("; "))))
    }
}
