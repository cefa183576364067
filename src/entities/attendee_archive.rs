//! Attendee archive entity - a rollover copy of an attendee row.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendee_archive")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Correlation id shared with the parent registration's archive row
    pub archive_id: String,
    /// Id of the original (now deleted) parent registration
    pub registration_id: i32,
    pub name: String,
    pub title: Option<String>,
    pub email: Option<String>,
    pub archived_at: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
