//! Registration entity - one conference or tech-conference registration.
//!
//! A registration identifies the registering district and its contact,
//! carries the attendee count and the computed total fee. Attendees past
//! the primary contact live in the `attendee` table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Registration database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    /// Unique identifier for the registration
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Business domain: `conference` or `tech-conference`
    pub domain: String,
    /// Registering organization / school district
    pub organization: String,
    /// Primary contact full name
    pub contact_name: String,
    /// Primary contact email address
    pub contact_email: String,
    /// Primary contact phone number
    pub contact_phone: String,
    /// Total attendees, primary contact included
    pub attendee_count: i32,
    /// Total fee in dollars, computed from the active settings at submission
    pub total_fee: f64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One registration has many additional attendees
    #[sea_orm(has_many = "super::attendee::Entity")]
    Attendees,
}

impl Related<super::attendee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
