//! Registration intake for the public conference forms.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use serde::Deserialize;

use crate::domain::Domain;
use crate::entities::{attendee, registration, settings};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationPayload {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    /// Attendees beyond the primary contact.
    #[serde(default)]
    pub attendees: Vec<AttendeePayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendeePayload {
    pub name: String,
    pub title: Option<String>,
    pub email: Option<String>,
}

fn validate(payload: &RegistrationPayload) -> ApiResult<()> {
    let required = [
        (&payload.organization, "Organization"),
        (&payload.contact_name, "Contact name"),
        (&payload.contact_email, "Contact email"),
        (&payload.contact_phone, "Contact phone"),
    ];
    for (value, label) in required {
        if value.trim().is_empty() {
            return Err(ApiError::Validation(format!("{label} is required")));
        }
    }
    for extra in &payload.attendees {
        if extra.name.trim().is_empty() {
            return Err(ApiError::Validation("Attendee name is required".to_string()));
        }
    }
    Ok(())
}

/// Create a registration (and its extra attendee rows) against the
/// domain's active settings. The total fee is the active per-attendee fee
/// times the attendee count, primary contact included.
pub async fn submit<C: ConnectionTrait>(
    db: &C,
    domain: Domain,
    payload: RegistrationPayload,
) -> ApiResult<registration::Model> {
    if !domain.has_registrations() {
        return Err(ApiError::InvalidDomain(domain.as_str().to_string()));
    }
    validate(&payload)?;

    let active = settings::Entity::find()
        .filter(settings::Column::Domain.eq(domain.as_str()))
        .filter(settings::Column::IsActive.eq(true))
        .one(db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Registration is not currently open".to_string()))?;

    let attendee_count = 1 + payload.attendees.len() as i32;
    let now = Utc::now().naive_utc();
    let created = registration::ActiveModel {
        domain: Set(domain.as_str().to_string()),
        organization: Set(payload.organization.trim().to_string()),
        contact_name: Set(payload.contact_name.trim().to_string()),
        contact_email: Set(payload.contact_email.trim().to_string()),
        contact_phone: Set(payload.contact_phone.trim().to_string()),
        attendee_count: Set(attendee_count),
        total_fee: Set(active.fee * f64::from(attendee_count)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for extra in payload.attendees {
        attendee::ActiveModel {
            registration_id: Set(created.id),
            name: Set(extra.name.trim().to_string()),
            title: Set(extra.title),
            email: Set(extra.email),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(created)
}
