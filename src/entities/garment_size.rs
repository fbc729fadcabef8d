use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Master table for garment sizes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garment_sizes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// e.g. "S", "M", "L", "42"
    #[sea_orm(unique)]
    pub size_value: String,
    pub size_label: Option<String>,
    pub size_category: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
