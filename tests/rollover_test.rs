//! Integration tests for the archive-and-reset rollover workflow.

mod common;

use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use tapt_portal::domain::Domain;
use tapt_portal::entities::{
    attendee, attendee_archive, nomination, nomination_archive, registration,
    registration_archive, settings,
};
use tapt_portal::ops::rollover::{NewSettings, run_rollover};

fn next_period() -> NewSettings {
    let today = Utc::now().date_naive();
    NewSettings {
        start_date: today + Duration::days(30),
        end_date: today + Duration::days(33),
        fee: 175.0,
        location: Some("Murfreesboro".to_string()),
        description: Some("Annual conference".to_string()),
    }
}

#[tokio::test]
async fn conference_rollover_end_to_end() {
    let db = common::setup_db().await;
    let today = Utc::now().date_naive();

    // Last year's active settings, two registrations, one extra attendee row.
    let old = common::seed_active_settings(
        &db,
        Domain::Conference,
        today - Duration::days(400),
        today - Duration::days(397),
        150.0,
    )
    .await;
    common::seed_registration(&db, Domain::Conference, "Davidson County Schools", 1).await;
    let reg = common::seed_registration(&db, Domain::Conference, "Knox County Schools", 3).await;
    common::seed_attendee(&db, reg.id, "Extra Rider").await;

    let outcome = run_rollover(&db, Domain::Conference, next_period())
        .await
        .unwrap();

    // Archive completeness: every live row copied under one archive id.
    let archive_id = outcome.archive_id.expect("rows existed, id must be set");
    assert_eq!(outcome.counts.registrations, 2);
    assert_eq!(outcome.counts.attendees, 1);
    assert_eq!(outcome.counts.nominations, 0);

    let reg_archives = registration_archive::Entity::find().all(&db).await.unwrap();
    assert_eq!(reg_archives.len(), 2);
    assert!(reg_archives.iter().all(|r| r.archive_id == archive_id));

    let att_archives = attendee_archive::Entity::find().all(&db).await.unwrap();
    assert_eq!(att_archives.len(), 1);
    assert_eq!(att_archives[0].archive_id, archive_id);
    assert_eq!(att_archives[0].registration_id, reg.id);

    // Live tables emptied.
    assert_eq!(registration::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(attendee::Entity::find().count(&db).await.unwrap(), 0);

    // Old settings deactivated, new row active with the new dates.
    let old_row = settings::Entity::find_by_id(old.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(!old_row.is_active);

    let active = settings::Entity::find()
        .filter(settings::Column::Domain.eq("conference"))
        .filter(settings::Column::IsActive.eq(true))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].start_date, today + Duration::days(30));
    assert_eq!(active[0].fee, 175.0);
}

#[tokio::test]
async fn rollover_is_scoped_to_its_domain() {
    let db = common::setup_db().await;
    common::seed_registration(&db, Domain::Conference, "Conference Org", 1).await;
    let tech = common::seed_registration(&db, Domain::TechConference, "Tech Org", 2).await;
    common::seed_attendee(&db, tech.id, "Tech Attendee").await;

    run_rollover(&db, Domain::Conference, next_period())
        .await
        .unwrap();

    // Tech-conference rows untouched.
    let remaining = registration::Entity::find().all(&db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].domain, "tech-conference");
    assert_eq!(attendee::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(
        registration_archive::Entity::find().count(&db).await.unwrap(),
        1
    );
    assert_eq!(
        attendee_archive::Entity::find().count(&db).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn settings_exclusivity_across_repeated_rollovers() {
    let db = common::setup_db().await;
    let today = Utc::now().date_naive();

    for year in 0..3i64 {
        let settings = NewSettings {
            start_date: today + Duration::days(30 + year),
            end_date: today + Duration::days(33 + year),
            fee: 100.0 + year as f64,
            location: None,
            description: None,
        };
        run_rollover(&db, Domain::Conference, settings).await.unwrap();
    }

    let all = settings::Entity::find()
        .filter(settings::Column::Domain.eq("conference"))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    let active: Vec<_> = all.iter().filter(|s| s.is_active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].fee, 102.0);
}

#[tokio::test]
async fn empty_domain_rollover_yields_no_archive_id() {
    let db = common::setup_db().await;
    common::seed_active_settings(
        &db,
        Domain::TechConference,
        Utc::now().date_naive(),
        Utc::now().date_naive(),
        50.0,
    )
    .await;

    let outcome = run_rollover(&db, Domain::TechConference, next_period())
        .await
        .unwrap();

    assert!(outcome.archive_id.is_none());
    assert_eq!(outcome.counts.registrations, 0);
    assert_eq!(
        registration_archive::Entity::find().count(&db).await.unwrap(),
        0
    );

    // The settings swap still ran.
    let active = settings::Entity::find()
        .filter(settings::Column::Domain.eq("tech-conference"))
        .filter(settings::Column::IsActive.eq(true))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].fee, 175.0);
}

#[tokio::test]
async fn hall_of_fame_rollover_archives_nominations() {
    let db = common::setup_db().await;
    common::seed_nomination(&db, "First Nominee").await;
    common::seed_nomination(&db, "Second Nominee").await;

    let outcome = run_rollover(&db, Domain::HallOfFame, next_period())
        .await
        .unwrap();

    let archive_id = outcome.archive_id.expect("nominations existed");
    assert_eq!(outcome.counts.nominations, 2);
    assert_eq!(nomination::Entity::find().count(&db).await.unwrap(), 0);

    let archived = nomination_archive::Entity::find().all(&db).await.unwrap();
    assert_eq!(archived.len(), 2);
    assert!(archived.iter().all(|n| n.archive_id == archive_id));
}
