use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Deserialize;
use serde_json::json;

use super::user::{
    CurrentUser, ROLE_USER, ensure_role_record, find_role, issue_token, revoke_token,
    verify_password,
};
use crate::entities::user;
use crate::error::{ApiError, ApiResult};
use crate::router::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    email: String,
    password: String,
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> ApiResult<Json<serde_json::Value>> {
    let user = user::Entity::find()
        .filter(user::Column::Email.eq(payload.email.trim().to_lowercase()))
        .one(&state.db)
        .await?
        .ok_or(ApiError::Unauthenticated)?;

    if !verify_password(&payload.password, &user.password_hash)? {
        return Err(ApiError::Unauthenticated);
    }

    // Role records are provisioned on first login.
    ensure_role_record(&state.db, user.id).await?;
    let token = issue_token(&state.db, user.id).await?;
    let role = find_role(&state.db, user.id)
        .await?
        .map_or_else(|| ROLE_USER.to_string(), |r| r.role);

    tracing::info!(user_id = user.id, "login");
    Ok(Json(json!({
        "success": true,
        "token": token,
        "user": { "id": user.id, "email": user.email, "role": role },
    })))
}

async fn logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<Json<serde_json::Value>> {
    revoke_token(&state.db, &current.token).await?;
    Ok(Json(json!({ "success": true })))
}

async fn me(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<Json<serde_json::Value>> {
    let role = find_role(&state.db, current.user.id)
        .await?
        .map_or_else(|| ROLE_USER.to_string(), |r| r.role);

    Ok(Json(json!({
        "success": true,
        "user": { "id": current.user.id, "email": current.user.email, "role": role },
    })))
}
