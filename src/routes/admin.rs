//! Admin back-office JSON routes. Every handler runs the authorization
//! gate first: bearer credential to identity, identity to admin role.
//! The one exception is assign-admin, whose bootstrap rule is evaluated
//! inside the operation itself.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::user::{CurrentUser, require_admin};
use crate::domain::Domain;
use crate::entities::{attendee, board_member, content_block, nomination, registration, settings};
use crate::error::{ApiError, ApiResult};
use crate::ops::rollover::{self, NewSettings};
use crate::ops::{roles, users};
use crate::router::AppState;
use crate::util::csv;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/registrations/{domain}", get(list_registrations))
        .route(
            "/api/admin/registrations/{domain}/export.csv",
            get(export_registrations),
        )
        .route(
            "/api/admin/registrations/{domain}/{id}",
            put(update_registration).delete(delete_registration),
        )
        .route("/api/admin/nominations", get(list_nominations))
        .route(
            "/api/admin/nominations/export.csv",
            get(export_nominations),
        )
        .route("/api/admin/nominations/{id}", delete(delete_nomination))
        .route(
            "/api/admin/nominations/{id}/status",
            put(set_nomination_status),
        )
        .route("/api/admin/board-members", post(create_board_member))
        .route(
            "/api/admin/board-members/{id}",
            put(update_board_member).delete(delete_board_member),
        )
        .route("/api/admin/content/{slug}", put(upsert_content))
        .route(
            "/api/admin/settings/{domain}",
            get(settings_history).put(update_active_settings),
        )
        .route("/api/admin/rollover", post(run_rollover))
        .route("/api/admin/users", post(create_user))
        .route("/api/admin/assign-admin", post(assign_admin))
}

// ---- registrations ----

async fn list_registrations(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(domain): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    let domain = Domain::parse(&domain)?;

    let rows = registration::Entity::find()
        .filter(registration::Column::Domain.eq(domain.as_str()))
        .order_by_desc(registration::Column::CreatedAt)
        .find_with_related(attendee::Entity)
        .all(&state.db)
        .await?;

    let data: Vec<serde_json::Value> = rows
        .into_iter()
        .map(|(reg, attendees)| json!({ "registration": reg, "attendees": attendees }))
        .collect();
    Ok(Json(json!({ "success": true, "data": data })))
}

#[derive(Debug, Deserialize)]
struct UpdateRegistration {
    organization: Option<String>,
    contact_name: Option<String>,
    contact_email: Option<String>,
    contact_phone: Option<String>,
    attendee_count: Option<i32>,
    total_fee: Option<f64>,
}

async fn update_registration(
    State(state): State<AppState>,
    current: CurrentUser,
    Path((domain, id)): Path<(String, i32)>,
    Json(payload): Json<UpdateRegistration>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    let domain = Domain::parse(&domain)?;

    let existing = registration::Entity::find_by_id(id)
        .filter(registration::Column::Domain.eq(domain.as_str()))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Registration not found".to_string()))?;

    let mut model = existing.into_active_model();
    if let Some(v) = payload.organization {
        model.organization = Set(v);
    }
    if let Some(v) = payload.contact_name {
        model.contact_name = Set(v);
    }
    if let Some(v) = payload.contact_email {
        model.contact_email = Set(v);
    }
    if let Some(v) = payload.contact_phone {
        model.contact_phone = Set(v);
    }
    if let Some(v) = payload.attendee_count {
        model.attendee_count = Set(v);
    }
    if let Some(v) = payload.total_fee {
        model.total_fee = Set(v);
    }
    model.updated_at = Set(Utc::now().naive_utc());
    let updated = model.update(&state.db).await?;

    Ok(Json(json!({ "success": true, "data": updated })))
}

async fn delete_registration(
    State(state): State<AppState>,
    current: CurrentUser,
    Path((domain, id)): Path<(String, i32)>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    let domain = Domain::parse(&domain)?;

    let existing = registration::Entity::find_by_id(id)
        .filter(registration::Column::Domain.eq(domain.as_str()))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Registration not found".to_string()))?;

    attendee::Entity::delete_many()
        .filter(attendee::Column::RegistrationId.eq(existing.id))
        .exec(&state.db)
        .await?;
    registration::Entity::delete_by_id(existing.id)
        .exec(&state.db)
        .await?;

    Ok(Json(json!({ "success": true })))
}

async fn export_registrations(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(domain): Path<String>,
) -> ApiResult<impl IntoResponse> {
    require_admin(&state.db, &current.user).await?;
    let domain = Domain::parse(&domain)?;

    let rows = registration::Entity::find()
        .filter(registration::Column::Domain.eq(domain.as_str()))
        .order_by_asc(registration::Column::Organization)
        .all(&state.db)
        .await?;

    let mut body = csv::row(&[
        "organization",
        "contact_name",
        "contact_email",
        "contact_phone",
        "attendee_count",
        "total_fee",
        "created_at",
    ]);
    for r in rows {
        body.push_str(&csv::row(&[
            &r.organization,
            &r.contact_name,
            &r.contact_email,
            &r.contact_phone,
            &r.attendee_count.to_string(),
            &format!("{:.2}", r.total_fee),
            &r.created_at.to_string(),
        ]));
    }

    Ok(([(header::CONTENT_TYPE, "text/csv")], body))
}

// ---- nominations ----

async fn list_nominations(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    let rows = nomination::Entity::find()
        .order_by_desc(nomination::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(json!({ "success": true, "data": rows })))
}

#[derive(Debug, Deserialize)]
struct StatusPayload {
    status: String,
}

async fn set_nomination_status(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<StatusPayload>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    if !matches!(payload.status.as_str(), "pending" | "approved" | "rejected") {
        return Err(ApiError::Validation(format!(
            "Unknown nomination status: {}",
            payload.status
        )));
    }

    let existing = nomination::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Nomination not found".to_string()))?;

    let mut model = existing.into_active_model();
    model.status = Set(payload.status);
    model.updated_at = Set(Utc::now().naive_utc());
    let updated = model.update(&state.db).await?;

    Ok(Json(json!({ "success": true, "data": updated })))
}

async fn delete_nomination(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    let res = nomination::Entity::delete_by_id(id).exec(&state.db).await?;
    if res.rows_affected == 0 {
        return Err(ApiError::NotFound("Nomination not found".to_string()));
    }
    Ok(Json(json!({ "success": true })))
}

async fn export_nominations(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    require_admin(&state.db, &current.user).await?;
    let rows = nomination::Entity::find()
        .order_by_asc(nomination::Column::NomineeName)
        .all(&state.db)
        .await?;

    let mut body = csv::row(&[
        "nominee_name",
        "nominee_city",
        "district",
        "region",
        "years_of_service",
        "nominator_name",
        "nominator_email",
        "status",
        "created_at",
    ]);
    for n in rows {
        body.push_str(&csv::row(&[
            &n.nominee_name,
            &n.nominee_city,
            &n.district,
            &n.region,
            &n.years_of_service.to_string(),
            &n.nominator_name,
            &n.nominator_email,
            &n.status,
            &n.created_at.to_string(),
        ]));
    }

    Ok(([(header::CONTENT_TYPE, "text/csv")], body))
}

// ---- board members ----

#[derive(Debug, Deserialize)]
struct BoardMemberPayload {
    name: String,
    title: String,
    district: Option<String>,
    email: Option<String>,
    photo_path: Option<String>,
    #[serde(default)]
    sort_order: i32,
}

async fn create_board_member(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<BoardMemberPayload>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("Name is required".to_string()));
    }

    let now = Utc::now().naive_utc();
    let created = board_member::ActiveModel {
        name: Set(payload.name),
        title: Set(payload.title),
        district: Set(payload.district),
        email: Set(payload.email),
        photo_path: Set(payload.photo_path),
        sort_order: Set(payload.sort_order),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(json!({ "success": true, "data": created })))
}

async fn update_board_member(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<BoardMemberPayload>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    let existing = board_member::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Board member not found".to_string()))?;

    let mut model = existing.into_active_model();
    model.name = Set(payload.name);
    model.title = Set(payload.title);
    model.district = Set(payload.district);
    model.email = Set(payload.email);
    model.photo_path = Set(payload.photo_path);
    model.sort_order = Set(payload.sort_order);
    model.updated_at = Set(Utc::now().naive_utc());
    let updated = model.update(&state.db).await?;

    Ok(Json(json!({ "success": true, "data": updated })))
}

async fn delete_board_member(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    let res = board_member::Entity::delete_by_id(id)
        .exec(&state.db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ApiError::NotFound("Board member not found".to_string()));
    }
    Ok(Json(json!({ "success": true })))
}

// ---- content ----

#[derive(Debug, Deserialize)]
struct ContentPayload {
    title: String,
    body: String,
}

async fn upsert_content(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(slug): Path<String>,
    Json(payload): Json<ContentPayload>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;

    let now = Utc::now().naive_utc();
    let existing = content_block::Entity::find()
        .filter(content_block::Column::Slug.eq(slug.clone()))
        .one(&state.db)
        .await?;

    let saved = match existing {
        Some(block) => {
            let mut model = block.into_active_model();
            model.title = Set(payload.title);
            model.body = Set(payload.body);
            model.updated_at = Set(now);
            model.update(&state.db).await?
        }
        None => {
            content_block::ActiveModel {
                slug: Set(slug),
                title: Set(payload.title),
                body: Set(payload.body),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&state.db)
            .await?
        }
    };

    Ok(Json(json!({ "success": true, "data": saved })))
}

// ---- settings ----

async fn settings_history(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(domain): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    let domain = Domain::parse(&domain)?;
    let rows = settings::Entity::find()
        .filter(settings::Column::Domain.eq(domain.as_str()))
        .order_by_desc(settings::Column::IsActive)
        .order_by_desc(settings::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(json!({ "success": true, "data": rows })))
}

/// Edit the active settings row in place (no rollover).
async fn update_active_settings(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(domain): Path<String>,
    Json(payload): Json<NewSettings>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    let domain = Domain::parse(&domain)?;

    let active = settings::Entity::find()
        .filter(settings::Column::Domain.eq(domain.as_str()))
        .filter(settings::Column::IsActive.eq(true))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("No active settings for this domain".to_string()))?;

    let mut model = active.into_active_model();
    model.start_date = Set(payload.start_date);
    model.end_date = Set(payload.end_date);
    model.fee = Set(payload.fee);
    model.location = Set(payload.location);
    model.description = Set(payload.description);
    model.updated_at = Set(Utc::now().naive_utc());
    let updated = model.update(&state.db).await?;

    Ok(Json(json!({ "success": true, "data": updated })))
}

// ---- rollover ----

#[derive(Debug, Deserialize)]
struct RolloverPayload {
    #[serde(rename = "type")]
    kind: String,
    settings: NewSettings,
}

async fn run_rollover(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<RolloverPayload>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    let domain = Domain::parse(&payload.kind)?;
    let outcome = rollover::run_rollover(&state.db, domain, payload.settings).await?;

    Ok(Json(json!({
        "success": true,
        "archiveId": outcome.archive_id,
        "archivedCounts": outcome.counts,
    })))
}

// ---- user management ----

async fn create_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<users::NewUser>,
) -> ApiResult<Json<serde_json::Value>> {
    require_admin(&state.db, &current.user).await?;
    let (created, role) = users::create_user(&state.db, payload).await?;

    Ok(Json(json!({
        "success": true,
        "user": { "id": created.id, "email": created.email, "role": role },
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignAdminPayload {
    user_id: i32,
}

/// No up-front admin check here: the bootstrap rule inside the operation
/// decides whether the caller needs to be an admin.
async fn assign_admin(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<AssignAdminPayload>,
) -> ApiResult<Json<serde_json::Value>> {
    let message = roles::assign_admin(&state.db, &current.user, payload.user_id).await?;
    Ok(Json(json!({ "success": true, "message": message })))
}
