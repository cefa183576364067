//! Shared helpers: in-memory SQLite with migrations applied, plus seed
//! functions for the tables the tests exercise.

#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection};

use tapt_portal::auth::user::ROLE_ADMIN;
use tapt_portal::domain::Domain;
use tapt_portal::entities::{attendee, nomination, registration, settings, user, user_role};

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations apply");
    db
}

pub async fn seed_user(db: &DatabaseConnection, email: &str) -> user::Model {
    let now = Utc::now().naive_utc();
    user::ActiveModel {
        email: Set(email.to_string()),
        // Password hashing is covered by its own tests; role/rollover
        // tests only need an identity row.
        password_hash: Set("unused".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_admin(db: &DatabaseConnection, email: &str) -> user::Model {
    let user = seed_user(db, email).await;
    let now = Utc::now().naive_utc();
    user_role::ActiveModel {
        user_id: Set(user.id),
        role: Set(ROLE_ADMIN.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
    user
}

pub async fn seed_active_settings(
    db: &DatabaseConnection,
    domain: Domain,
    start_date: NaiveDate,
    end_date: NaiveDate,
    fee: f64,
) -> settings::Model {
    let now = Utc::now().naive_utc();
    settings::ActiveModel {
        domain: Set(domain.as_str().to_string()),
        is_active: Set(true),
        start_date: Set(start_date),
        end_date: Set(end_date),
        fee: Set(fee),
        location: Set(None),
        description: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_registration(
    db: &DatabaseConnection,
    domain: Domain,
    organization: &str,
    attendee_count: i32,
) -> registration::Model {
    let now = Utc::now().naive_utc();
    registration::ActiveModel {
        domain: Set(domain.as_str().to_string()),
        organization: Set(organization.to_string()),
        contact_name: Set("Contact Person".to_string()),
        contact_email: Set("contact@example.org".to_string()),
        contact_phone: Set("615-555-0100".to_string()),
        attendee_count: Set(attendee_count),
        total_fee: Set(f64::from(attendee_count) * 150.0),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_attendee(
    db: &DatabaseConnection,
    registration_id: i32,
    name: &str,
) -> attendee::Model {
    let now = Utc::now().naive_utc();
    attendee::ActiveModel {
        registration_id: Set(registration_id),
        name: Set(name.to_string()),
        title: Set(None),
        email: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_nomination(db: &DatabaseConnection, nominee: &str) -> nomination::Model {
    let now = Utc::now().naive_utc();
    nomination::ActiveModel {
        nominee_name: Set(nominee.to_string()),
        nominee_city: Set("Memphis".to_string()),
        district: Set("Shelby County".to_string()),
        region: Set("West".to_string()),
        years_of_service: Set(20),
        reason: Set("Long and safe service".to_string()),
        nominator_name: Set("A Colleague".to_string()),
        nominator_email: Set("colleague@example.org".to_string()),
        status: Set("pending".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
