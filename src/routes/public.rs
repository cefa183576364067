//! Public JSON routes backing the informational pages and the member
//! forms. No authentication.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde_json::json;

use crate::domain::Domain;
use crate::entities::{board_member, content_block, settings};
use crate::error::{ApiError, ApiResult};
use crate::ops::{nominations, registrations};
use crate::router::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/settings/{domain}", get(active_settings))
        .route("/api/registrations/{domain}", post(submit_registration))
        .route("/api/nominations", post(submit_nomination))
        .route("/api/board-members", get(list_board_members))
        .route("/api/content/{slug}", get(get_content))
}

/// Active settings for a domain; `data` is null when nothing is active
/// (callers treat that as "closed / not configured").
async fn active_settings(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let domain = Domain::parse(&domain)?;
    let active = settings::Entity::find()
        .filter(settings::Column::Domain.eq(domain.as_str()))
        .filter(settings::Column::IsActive.eq(true))
        .one(&state.db)
        .await?;

    Ok(Json(json!({ "success": true, "data": active })))
}

async fn submit_registration(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Json(payload): Json<registrations::RegistrationPayload>,
) -> ApiResult<Json<serde_json::Value>> {
    let domain = Domain::parse(&domain)?;
    let created = registrations::submit(&state.db, domain, payload).await?;
    Ok(Json(json!({ "success": true, "data": created })))
}

async fn submit_nomination(
    State(state): State<AppState>,
    Json(payload): Json<nominations::NominationPayload>,
) -> ApiResult<Json<serde_json::Value>> {
    let created = nominations::submit(&state.db, payload).await?;
    Ok(Json(json!({ "success": true, "data": created })))
}

async fn list_board_members(
    State(state): State<AppState>,
) -> ApiResult<Json<serde_json::Value>> {
    let members = board_member::Entity::find()
        .order_by_asc(board_member::Column::SortOrder)
        .order_by_asc(board_member::Column::Name)
        .all(&state.db)
        .await?;
    Ok(Json(json!({ "success": true, "data": members })))
}

async fn get_content(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let block = content_block::Entity::find()
        .filter(content_block::Column::Slug.eq(slug))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Content not found".to_string()))?;
    Ok(Json(json!({ "success": true, "data": block })))
}
