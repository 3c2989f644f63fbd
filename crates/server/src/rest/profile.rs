use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use shared_types::{AppError, UpdateProfileRequest, UserProfile};

use crate::directory::{Directory, DirectoryBackend};
use crate::session::Requester;

// ---------------------------------------------------------------------------
// GET /api/profile
// ---------------------------------------------------------------------------

/// Profile of the signed-in account, as shown in the settings panel.
#[utoipa::path(
    get,
    path = "/api/profile",
    params(
        ("X-User-Role" = String, Header, description = "ADMIN, ENCADREUR or STAGIAIRE"),
        ("X-User-Id" = i64, Header, description = "Account id of the requester")
    ),
    responses(
        (status = 200, description = "Current profile", body = UserProfile),
        (status = 400, description = "Missing or invalid identity", body = AppError),
        (status = 404, description = "Unknown account", body = AppError),
        (status = 502, description = "Directory unavailable", body = AppError)
    ),
    tag = "profile"
)]
#[tracing::instrument(skip_all, fields(user_id = requester.0.user_id))]
pub async fn current_profile(
    State(directory): State<Arc<DirectoryBackend>>,
    requester: Requester,
) -> Result<Json<UserProfile>, AppError> {
    let user_id = requester.0.user_id;
    let profile = directory
        .profile(user_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Profil {user_id} introuvable")))?;
    Ok(Json(profile))
}

// ---------------------------------------------------------------------------
// PUT /api/profile
// ---------------------------------------------------------------------------

/// Update names, phone and department of the signed-in account.
#[utoipa::path(
    put,
    path = "/api/profile",
    params(
        ("X-User-Role" = String, Header, description = "ADMIN, ENCADREUR or STAGIAIRE"),
        ("X-User-Id" = i64, Header, description = "Account id of the requester")
    ),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserProfile),
        (status = 400, description = "Missing or invalid identity", body = AppError),
        (status = 404, description = "Unknown account", body = AppError),
        (status = 422, description = "Invalid fields", body = AppError),
        (status = 502, description = "Directory unavailable", body = AppError)
    ),
    tag = "profile"
)]
#[tracing::instrument(skip_all, fields(user_id = requester.0.user_id))]
pub async fn update_profile(
    State(directory): State<Arc<DirectoryBackend>>,
    requester: Requester,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    body.validate()?;

    let user_id = requester.0.user_id;
    let profile = directory
        .update_profile(user_id, &body)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Profil {user_id} introuvable")))?;

    tracing::info!("profile updated");
    Ok(Json(profile))
}
