//! Integration tests for the token layer, the gate and privileged user
//! creation.

mod common;

use chrono::{TimeDelta, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};

use tapt_portal::auth::user::{
    ROLE_USER, delete_expired_tokens, ensure_role_record, find_role, issue_token, require_admin,
    resolve_token, revoke_token, token_digest,
};
use tapt_portal::entities::auth_token;
use tapt_portal::error::ApiError;
use tapt_portal::ops::users::{NewUser, create_user};

#[tokio::test]
async fn token_round_trip() {
    let db = common::setup_db().await;
    let user = common::seed_user(&db, "member@example.org").await;

    let token = issue_token(&db, user.id).await.unwrap();
    let resolved = resolve_token(&db, &token).await.unwrap();
    assert_eq!(resolved.id, user.id);

    // Raw tokens never hit the table.
    let stored = auth_token::Entity::find().one(&db).await.unwrap().unwrap();
    assert_ne!(stored.token_hash, token);
    assert_eq!(stored.token_hash, token_digest(&token));
}

#[tokio::test]
async fn revoked_and_unknown_tokens_are_rejected() {
    let db = common::setup_db().await;
    let user = common::seed_user(&db, "member@example.org").await;
    let token = issue_token(&db, user.id).await.unwrap();

    revoke_token(&db, &token).await.unwrap();
    assert!(matches!(
        resolve_token(&db, &token).await.unwrap_err(),
        ApiError::Unauthenticated
    ));
    assert!(matches!(
        resolve_token(&db, "not-a-token").await.unwrap_err(),
        ApiError::Unauthenticated
    ));
}

#[tokio::test]
async fn expired_tokens_are_rejected_and_swept() {
    let db = common::setup_db().await;
    let user = common::seed_user(&db, "member@example.org").await;
    let now = Utc::now().naive_utc();

    auth_token::ActiveModel {
        user_id: Set(user.id),
        token_hash: Set(token_digest("stale")),
        expires_at: Set(now - TimeDelta::hours(1)),
        created_at: Set(now - TimeDelta::hours(25)),
        updated_at: Set(now - TimeDelta::hours(25)),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    assert!(resolve_token(&db, "stale").await.is_err());
    assert_eq!(delete_expired_tokens(&db).await.unwrap(), 1);
    assert!(
        auth_token::Entity::find()
            .filter(auth_token::Column::TokenHash.eq(token_digest("stale")))
            .one(&db)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn gate_forbids_non_admins() {
    let db = common::setup_db().await;
    let user = common::seed_user(&db, "member@example.org").await;
    ensure_role_record(&db, user.id).await.unwrap();

    assert!(matches!(
        require_admin(&db, &user).await.unwrap_err(),
        ApiError::Forbidden
    ));

    let admin = common::seed_admin(&db, "admin@example.org").await;
    assert!(require_admin(&db, &admin).await.is_ok());
}

#[tokio::test]
async fn first_login_provisions_a_user_role() {
    let db = common::setup_db().await;
    let user = common::seed_user(&db, "member@example.org").await;
    assert!(find_role(&db, user.id).await.unwrap().is_none());

    ensure_role_record(&db, user.id).await.unwrap();
    ensure_role_record(&db, user.id).await.unwrap();

    let role = find_role(&db, user.id).await.unwrap().unwrap();
    assert_eq!(role.role, ROLE_USER);
}

#[tokio::test]
async fn privileged_creation_sets_identity_and_role() {
    let db = common::setup_db().await;
    let (created, role) = create_user(
        &db,
        NewUser {
            email: "New.Admin@Example.Org".into(),
            password: "correct horse battery".into(),
            role: "admin".into(),
        },
    )
    .await
    .unwrap();

    // Email normalized, role record written.
    assert_eq!(created.email, "new.admin@example.org");
    assert_eq!(role, "admin");
    assert!(require_admin(&db, &created).await.is_ok());
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let db = common::setup_db().await;
    common::seed_user(&db, "taken@example.org").await;

    let err = create_user(
        &db,
        NewUser {
            email: "taken@example.org".into(),
            password: "long enough pw".into(),
            role: "user".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn invalid_role_and_short_password_are_rejected() {
    let db = common::setup_db().await;

    let err = create_user(
        &db,
        NewUser {
            email: "a@example.org".into(),
            password: "short".into(),
            role: "user".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = create_user(
        &db,
        NewUser {
            email: "a@example.org".into(),
            password: "long enough pw".into(),
            role: "superuser".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}
