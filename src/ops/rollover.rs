//! The archive-and-reset rollover workflow.
//!
//! Given a domain and the next period's settings, archive every live row
//! for that domain under one fresh archive id, clear the live tables, and
//! swap the active settings row. Steps run in a fixed order chosen so a
//! failure never loses data: copies are written before any delete runs,
//! so aborting mid-way leaves at worst archive-only duplicates. There is
//! no compensating rollback of completed steps. The two settings writes
//! (deactivate all, insert new active) run inside one transaction so
//! readers never observe a domain with zero active rows.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Domain;
use crate::entities::{
    attendee, attendee_archive, nomination, nomination_archive, registration,
    registration_archive, settings,
};
use crate::error::ApiResult;

/// The next period's settings, supplied by the admin. `is_active` is not
/// accepted from the caller; the inserted row is always active.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSettings {
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    #[serde(default)]
    pub fee: f64,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// How many rows one rollover archived, per table.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct ArchivedCounts {
    pub registrations: u64,
    pub attendees: u64,
    pub nominations: u64,
}

/// Result of one rollover invocation. `archive_id` is `None` when the
/// domain had no rows to archive.
#[derive(Debug, Clone, Serialize)]
pub struct RolloverOutcome {
    pub archive_id: Option<String>,
    pub counts: ArchivedCounts,
}

/// Run the rollover for one domain. Caller must already have passed the
/// admin gate.
pub async fn run_rollover<C>(
    db: &C,
    domain: Domain,
    new_settings: NewSettings,
) -> ApiResult<RolloverOutcome>
where
    C: ConnectionTrait + TransactionTrait,
{
    let mut archive_id = None;
    let mut counts = ArchivedCounts::default();

    if domain.has_registrations() {
        archive_registrations(db, domain, &mut archive_id, &mut counts).await?;
    } else {
        archive_nominations(db, &mut archive_id, &mut counts).await?;
    }

    // Deactivate-then-insert in one transaction: at most one active row
    // per domain is ever observable.
    let txn = db.begin().await?;
    settings::Entity::update_many()
        .col_expr(settings::Column::IsActive, Expr::value(false))
        .filter(settings::Column::Domain.eq(domain.as_str()))
        .exec(&txn)
        .await?;

    let now = Utc::now().naive_utc();
    settings::ActiveModel {
        domain: Set(domain.as_str().to_string()),
        is_active: Set(true),
        start_date: Set(new_settings.start_date),
        end_date: Set(new_settings.end_date),
        fee: Set(new_settings.fee),
        location: Set(new_settings.location),
        description: Set(new_settings.description),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    tracing::info!(
        domain = %domain,
        archive_id = archive_id.as_deref().unwrap_or("none"),
        registrations = counts.registrations,
        attendees = counts.attendees,
        nominations = counts.nominations,
        "rollover complete"
    );

    Ok(RolloverOutcome { archive_id, counts })
}

/// Steps 1-4 for conference / tech-conference: read registrations, copy
/// them (and their attendees) into the archive tables, then delete the
/// live rows. Skipped entirely when the domain has no registrations.
async fn archive_registrations<C: ConnectionTrait>(
    db: &C,
    domain: Domain,
    archive_id: &mut Option<String>,
    counts: &mut ArchivedCounts,
) -> ApiResult<()> {
    let regs = registration::Entity::find()
        .filter(registration::Column::Domain.eq(domain.as_str()))
        .all(db)
        .await?;
    if regs.is_empty() {
        return Ok(());
    }

    let id = Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc();

    let copies: Vec<registration_archive::ActiveModel> = regs
        .iter()
        .map(|r| registration_archive::ActiveModel {
            archive_id: Set(id.clone()),
            domain: Set(r.domain.clone()),
            organization: Set(r.organization.clone()),
            contact_name: Set(r.contact_name.clone()),
            contact_email: Set(r.contact_email.clone()),
            contact_phone: Set(r.contact_phone.clone()),
            attendee_count: Set(r.attendee_count),
            total_fee: Set(r.total_fee),
            registered_at: Set(r.created_at),
            archived_at: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .collect();
    registration_archive::Entity::insert_many(copies).exec(db).await?;
    counts.registrations = regs.len() as u64;

    let reg_ids: Vec<i32> = regs.iter().map(|r| r.id).collect();
    let attendees = attendee::Entity::find()
        .filter(attendee::Column::RegistrationId.is_in(reg_ids.clone()))
        .all(db)
        .await?;
    if !attendees.is_empty() {
        let now = Utc::now().naive_utc();
        let copies: Vec<attendee_archive::ActiveModel> = attendees
            .iter()
            .map(|a| attendee_archive::ActiveModel {
                archive_id: Set(id.clone()),
                registration_id: Set(a.registration_id),
                name: Set(a.name.clone()),
                title: Set(a.title.clone()),
                email: Set(a.email.clone()),
                archived_at: Set(now),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();
        attendee_archive::Entity::insert_many(copies).exec(db).await?;
        counts.attendees = attendees.len() as u64;
    }

    // Copies are on disk; only now do the live rows go. Children first.
    attendee::Entity::delete_many()
        .filter(attendee::Column::RegistrationId.is_in(reg_ids))
        .exec(db)
        .await?;
    registration::Entity::delete_many()
        .filter(registration::Column::Domain.eq(domain.as_str()))
        .exec(db)
        .await?;

    *archive_id = Some(id);
    Ok(())
}

/// Steps 1-4 for hall-of-fame: same copy-then-delete over nominations.
async fn archive_nominations<C: ConnectionTrait>(
    db: &C,
    archive_id: &mut Option<String>,
    counts: &mut ArchivedCounts,
) -> ApiResult<()> {
    let noms = nomination::Entity::find().all(db).await?;
    if noms.is_empty() {
        return Ok(());
    }

    let id = Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc();

    let copies: Vec<nomination_archive::ActiveModel> = noms
        .iter()
        .map(|n| nomination_archive::ActiveModel {
            archive_id: Set(id.clone()),
            nominee_name: Set(n.nominee_name.clone()),
            nominee_city: Set(n.nominee_city.clone()),
            district: Set(n.district.clone()),
            region: Set(n.region.clone()),
            years_of_service: Set(n.years_of_service),
            reason: Set(n.reason.clone()),
            nominator_name: Set(n.nominator_name.clone()),
            nominator_email: Set(n.nominator_email.clone()),
            status: Set(n.status.clone()),
            submitted_at: Set(n.created_at),
            archived_at: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .collect();
    nomination_archive::Entity::insert_many(copies).exec(db).await?;
    counts.nominations = noms.len() as u64;

    nomination::Entity::delete_many().exec(db).await?;

    *archive_id = Some(id);
    Ok(())
}
