//! The authorization gate and the bearer-token session layer.
//!
//! Every privileged route goes through the same two steps: the
//! [`CurrentUser`] extractor resolves the `Authorization: Bearer` header
//! to a user row, and [`require_admin`] checks that user's role record.
//! The check is re-run per call; nothing is cached.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use chrono::{TimeDelta, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::entities::{auth_token, user, user_role};
use crate::error::{ApiError, ApiResult};
use crate::router::AppState;

/// Issued tokens live this long before the sweeper reclaims them.
const TOKEN_TTL_HOURS: i64 = 24;

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// Hash a password with Argon2id and a per-hash random salt.
pub fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(format!("hash error: {e}")))
}

/// Verify a plaintext password against a stored PHC-format hash.
pub fn verify_password(password: &str, hash: &str) -> ApiResult<bool> {
    let parsed = argon2::PasswordHash::new(hash)
        .map_err(|e| ApiError::Internal(format!("invalid hash format: {e}")))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(ApiError::Internal(format!("verify error: {e}"))),
    }
}

/// Hex sha256 digest of a raw bearer token. Only digests hit the database.
pub fn token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Issue a fresh opaque bearer token for `user_id` and persist its digest.
pub async fn issue_token<C: ConnectionTrait>(db: &C, user_id: i32) -> ApiResult<String> {
    let token = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    let now = Utc::now().naive_utc();
    auth_token::ActiveModel {
        user_id: Set(user_id),
        token_hash: Set(token_digest(&token)),
        expires_at: Set(now + TimeDelta::hours(TOKEN_TTL_HOURS)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(token)
}

/// Resolve a raw bearer token to its user. `Unauthenticated` if the token
/// is unknown or expired.
pub async fn resolve_token<C: ConnectionTrait>(db: &C, token: &str) -> ApiResult<user::Model> {
    let row = auth_token::Entity::find()
        .filter(auth_token::Column::TokenHash.eq(token_digest(token)))
        .filter(auth_token::Column::ExpiresAt.gt(Utc::now().naive_utc()))
        .one(db)
        .await?
        .ok_or(ApiError::Unauthenticated)?;

    user::Entity::find_by_id(row.user_id)
        .one(db)
        .await?
        .ok_or(ApiError::Unauthenticated)
}

/// Revoke one token (logout).
pub async fn revoke_token<C: ConnectionTrait>(db: &C, token: &str) -> ApiResult<()> {
    auth_token::Entity::delete_many()
        .filter(auth_token::Column::TokenHash.eq(token_digest(token)))
        .exec(db)
        .await?;
    Ok(())
}

/// Delete expired token rows; run periodically from the sweeper task.
pub async fn delete_expired_tokens<C: ConnectionTrait>(db: &C) -> Result<u64, sea_orm::DbErr> {
    let res = auth_token::Entity::delete_many()
        .filter(auth_token::Column::ExpiresAt.lte(Utc::now().naive_utc()))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Look up the role record for an identity, if one exists.
pub async fn find_role<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> Result<Option<user_role::Model>, sea_orm::DbErr> {
    user_role::Entity::find()
        .filter(user_role::Column::UserId.eq(user_id))
        .one(db)
        .await
}

/// Auto-provision a `user` role record on first login if absent.
pub async fn ensure_role_record<C: ConnectionTrait>(db: &C, user_id: i32) -> ApiResult<()> {
    if find_role(db, user_id).await?.is_none() {
        let now = Utc::now().naive_utc();
        user_role::ActiveModel {
            user_id: Set(user_id),
            role: Set(ROLE_USER.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

/// The admin half of the gate: `Forbidden` unless the identity's role
/// record says `admin`.
pub async fn require_admin<C: ConnectionTrait>(db: &C, user: &user::Model) -> ApiResult<()> {
    match find_role(db, user.id).await? {
        Some(role) if role.role == ROLE_ADMIN => Ok(()),
        _ => Err(ApiError::Forbidden),
    }
}

/// Extractor resolving the bearer credential to a verified identity.
///
/// Rejects with `Unauthenticated` when the header is missing or the token
/// does not resolve; admin-only routes additionally call
/// [`require_admin`].
pub struct CurrentUser {
    pub user: user::Model,
    /// The raw token that authenticated this request (needed by logout).
    pub token: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::Unauthenticated)?;

        let token = bearer.token().to_string();
        let user = resolve_token(&state.db, &token).await?;
        Ok(CurrentUser { user, token })
    }
}
