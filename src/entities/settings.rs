//! Settings entity - one period's dates, fee and description for a domain.
//!
//! At most one row per domain carries `is_active = true`; rollover
//! enforces this by deactivating every existing row before inserting the
//! next active one.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Settings database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Business domain this row governs
    pub domain: String,
    /// Whether this row is the period currently accepting submissions
    pub is_active: bool,
    /// Period opens (event or nomination-window start)
    pub start_date: Date,
    /// Period closes
    pub end_date: Date,
    /// Per-attendee registration fee in dollars, 0 for hall-of-fame
    pub fee: f64,
    pub location: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
