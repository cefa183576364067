//! Nomination entity - one Hall of Fame nomination.
//!
//! Submitted through the public form, always created with status
//! `pending`; the status is only ever changed by an admin.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Nomination database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "nomination")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nominee_name: String,
    pub nominee_city: String,
    /// School district the nominee served
    pub district: String,
    /// TAPT region
    pub region: String,
    pub years_of_service: i32,
    /// Free-text nomination reason
    pub reason: String,
    pub nominator_name: String,
    pub nominator_email: String,
    /// `pending` | `approved` | `rejected`
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
