//! Nomination intake guard for the public Hall of Fame form.
//!
//! Validates the payload shape, checks the nomination window against the
//! active hall-of-fame settings, and forces the stored status to
//! `pending` regardless of anything the caller supplied.

use std::sync::OnceLock;

use chrono::Utc;
use regex::Regex;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use serde::Deserialize;

use crate::domain::Domain;
use crate::entities::{nomination, settings};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Deserialize)]
pub struct NominationPayload {
    #[serde(default)]
    pub nominee_name: String,
    #[serde(default)]
    pub nominee_city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub years_of_service: i32,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub nominator_name: String,
    #[serde(default)]
    pub nominator_email: String,
    /// Ignored: submissions are always stored as `pending`.
    #[serde(default)]
    pub status: Option<String>,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"))
}

/// Reject the payload unless every required field is present and the
/// nominator email looks like an email.
pub fn validate(payload: &NominationPayload) -> ApiResult<()> {
    let required = [
        (&payload.nominee_name, "Nominee name"),
        (&payload.nominee_city, "Nominee city"),
        (&payload.district, "District"),
        (&payload.region, "Region"),
        (&payload.reason, "Nomination reason"),
        (&payload.nominator_name, "Nominator name"),
        (&payload.nominator_email, "Nominator email"),
    ];
    for (value, label) in required {
        if value.trim().is_empty() {
            return Err(ApiError::Validation(format!("{label} is required")));
        }
    }
    if payload.years_of_service <= 0 {
        return Err(ApiError::Validation(
            "Years of service is required".to_string(),
        ));
    }
    if !email_regex().is_match(payload.nominator_email.trim()) {
        return Err(ApiError::Validation(
            "Invalid nominator email address".to_string(),
        ));
    }
    Ok(())
}

/// Validate, enforce the nomination window, insert with status `pending`.
pub async fn submit<C: ConnectionTrait>(
    db: &C,
    payload: NominationPayload,
) -> ApiResult<nomination::Model> {
    validate(&payload)?;

    let active = settings::Entity::find()
        .filter(settings::Column::Domain.eq(Domain::HallOfFame.as_str()))
        .filter(settings::Column::IsActive.eq(true))
        .one(db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Nominations are not currently open".to_string()))?;

    let today = Utc::now().date_naive();
    if today < active.start_date {
        return Err(ApiError::Validation(format!(
            "Nominations open on {}",
            active.start_date
        )));
    }
    if today > active.end_date {
        return Err(ApiError::Validation(format!(
            "Nominations closed on {}",
            active.end_date
        )));
    }

    let now = Utc::now().naive_utc();
    let created = nomination::ActiveModel {
        nominee_name: Set(payload.nominee_name.trim().to_string()),
        nominee_city: Set(payload.nominee_city.trim().to_string()),
        district: Set(payload.district.trim().to_string()),
        region: Set(payload.region.trim().to_string()),
        years_of_service: Set(payload.years_of_service),
        reason: Set(payload.reason.trim().to_string()),
        nominator_name: Set(payload.nominator_name.trim().to_string()),
        nominator_email: Set(payload.nominator_email.trim().to_string()),
        // Caller-supplied status is never honored.
        status: Set("pending".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> NominationPayload {
        NominationPayload {
            nominee_name: "Pat Driver".into(),
            nominee_city: "Nashville".into(),
            district: "Davidson County".into(),
            region: "Middle".into(),
            years_of_service: 25,
            reason: "Decades of safe routes".into(),
            nominator_name: "Sam Clerk".into(),
            nominator_email: "sam@example.org".into(),
            status: None,
        }
    }

    #[test]
    fn accepts_complete_payload() {
        assert!(validate(&payload()).is_ok());
    }

    #[test]
    fn rejects_missing_field_by_name() {
        let mut p = payload();
        p.district = "  ".into();
        let err = validate(&p).unwrap_err();
        assert_eq!(err.to_string(), "District is required");
    }

    #[test]
    fn rejects_zero_years_of_service() {
        let mut p = payload();
        p.years_of_service = 0;
        assert!(validate(&p).is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["plainaddress", "no@tld", "spaces in@example.com", "@example.com"] {
            let mut p = payload();
            p.nominator_email = bad.into();
            assert!(validate(&p).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn accepts_ordinary_email() {
        let mut p = payload();
        p.nominator_email = "first.last@k12.tn.us".into();
        assert!(validate(&p).is_ok());
    }
}
