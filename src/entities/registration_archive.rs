//! Registration archive entity - a rollover copy of a registration.
//!
//! Every row written by one rollover invocation shares one `archive_id`,
//! which is the only link back to "the same rollover event".

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registration_archive")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Correlation id shared by all rows of one rollover
    pub archive_id: String,
    pub domain: String,
    pub organization: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub attendee_count: i32,
    pub total_fee: f64,
    /// `created_at` of the original registration
    pub registered_at: DateTime,
    pub archived_at: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
