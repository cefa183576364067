//! Privileged user creation (admin back-office).

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use serde::Deserialize;

use crate::auth::user::{ROLE_ADMIN, ROLE_USER, hash_password};
use crate::entities::{user, user_role};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Create an identity plus its role record. Caller must already have
/// passed the admin gate.
///
/// A duplicate email fails with `Conflict` before anything is written. If
/// the role insert fails after the identity insert succeeded, the error
/// propagates and the identity is left without a role record; there is no
/// rollback of the identity creation.
pub async fn create_user<C: ConnectionTrait>(
    db: &C,
    payload: NewUser,
) -> ApiResult<(user::Model, String)> {
    let email = payload.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::Validation("A valid email is required".to_string()));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    let role = match payload.role.as_str() {
        ROLE_USER | ROLE_ADMIN => payload.role.clone(),
        other => {
            return Err(ApiError::Validation(format!("Unknown role: {other}")));
        }
    };

    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(email.clone()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(
            "A user with this email already exists".to_string(),
        ));
    }

    let now = Utc::now().naive_utc();
    let created = user::ActiveModel {
        email: Set(email),
        password_hash: Set(hash_password(&payload.password)?),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    user_role::ActiveModel {
        user_id: Set(created.id),
        role: Set(role.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(user_id = created.id, role = %role, "user created");
    Ok((created, role))
}
