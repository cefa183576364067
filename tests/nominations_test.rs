//! Integration tests for the nomination intake guard's window checks.

mod common;

use chrono::{Duration, Utc};

use tapt_portal::domain::Domain;
use tapt_portal::error::ApiError;
use tapt_portal::ops::nominations::{NominationPayload, submit};

fn payload() -> NominationPayload {
    NominationPayload {
        nominee_name: "Pat Driver".into(),
        nominee_city: "Jackson".into(),
        district: "Madison County".into(),
        region: "West".into(),
        years_of_service: 30,
        reason: "Thirty years without an incident".into(),
        nominator_name: "Lee Supervisor".into(),
        nominator_email: "lee@example.org".into(),
        status: None,
    }
}

#[tokio::test]
async fn rejected_when_no_active_settings() {
    let db = common::setup_db().await;
    let err = submit(&db, payload()).await.unwrap_err();
    assert_eq!(err.to_string(), "Nominations are not currently open");
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn rejected_before_window_opens() {
    let db = common::setup_db().await;
    let today = Utc::now().date_naive();
    let start = today + Duration::days(5);
    common::seed_active_settings(&db, Domain::HallOfFame, start, today + Duration::days(30), 0.0)
        .await;

    let err = submit(&db, payload()).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Nominations open on {start}"));
}

#[tokio::test]
async fn rejected_after_window_closes() {
    let db = common::setup_db().await;
    let today = Utc::now().date_naive();
    let end = today - Duration::days(3);
    common::seed_active_settings(&db, Domain::HallOfFame, today - Duration::days(30), end, 0.0)
        .await;

    let err = submit(&db, payload()).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Nominations closed on {end}"));
}

#[tokio::test]
async fn within_window_stores_pending_regardless_of_supplied_status() {
    let db = common::setup_db().await;
    let today = Utc::now().date_naive();
    common::seed_active_settings(
        &db,
        Domain::HallOfFame,
        today - Duration::days(5),
        today + Duration::days(5),
        0.0,
    )
    .await;

    let mut p = payload();
    p.status = Some("approved".into());
    let created = submit(&db, p).await.unwrap();

    assert_eq!(created.status, "pending");
    assert_eq!(created.nominee_name, "Pat Driver");
}

#[tokio::test]
async fn missing_field_is_rejected_before_any_lookup() {
    let db = common::setup_db().await;
    let mut p = payload();
    p.nominee_name = String::new();

    let err = submit(&db, p).await.unwrap_err();
    assert_eq!(err.to_string(), "Nominee name is required");
}

#[tokio::test]
async fn window_boundaries_are_inclusive() {
    let db = common::setup_db().await;
    let today = Utc::now().date_naive();
    common::seed_active_settings(&db, Domain::HallOfFame, today, today, 0.0).await;

    assert!(submit(&db, payload()).await.is_ok());
}
