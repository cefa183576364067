//! Nomination archive entity - a rollover copy of a nomination.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "nomination_archive")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Correlation id shared by all rows of one rollover
    pub archive_id: String,
    pub nominee_name: String,
    pub nominee_city: String,
    pub district: String,
    pub region: String,
    pub years_of_service: i32,
    pub reason: String,
    pub nominator_name: String,
    pub nominator_email: String,
    /// Status at the moment of archiving
    pub status: String,
    /// `created_at` of the original nomination
    pub submitted_at: DateTime,
    pub archived_at: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
