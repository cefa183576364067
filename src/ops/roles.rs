//! Admin-role assignment with the first-admin bootstrap rule.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter,
};

use crate::auth::user::{ROLE_ADMIN, find_role};
use crate::entities::{user, user_role};
use crate::error::{ApiError, ApiResult};

/// Grant the `admin` role to `target_user_id`.
///
/// While zero admin records exist, any authenticated caller may grant the
/// first one - the deliberate bootstrap escape hatch for initial setup.
/// Once at least one admin exists, the caller must be an admin.
/// Re-granting a role the target already holds is a no-op in effect.
pub async fn assign_admin<C: ConnectionTrait>(
    db: &C,
    caller: &user::Model,
    target_user_id: i32,
) -> ApiResult<String> {
    let target = user::Entity::find_by_id(target_user_id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Target user not found".to_string()))?;

    let admin_count = user_role::Entity::find()
        .filter(user_role::Column::Role.eq(ROLE_ADMIN))
        .count(db)
        .await?;

    if admin_count == 0 {
        tracing::warn!(
            caller_id = caller.id,
            target_id = target.id,
            "bootstrap: granting first admin role"
        );
    } else {
        match find_role(db, caller.id).await? {
            Some(role) if role.role == ROLE_ADMIN => {}
            _ => return Err(ApiError::Forbidden),
        }
    }

    let now = Utc::now().naive_utc();
    match find_role(db, target.id).await? {
        Some(existing) if existing.role == ROLE_ADMIN => {}
        Some(existing) => {
            let mut record = existing.into_active_model();
            record.role = Set(ROLE_ADMIN.to_string());
            record.updated_at = Set(now);
            record.update(db).await?;
        }
        None => {
            user_role::ActiveModel {
                user_id: Set(target.id),
                role: Set(ROLE_ADMIN.to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    Ok(format!("Admin role assigned to {}", target.email))
}
