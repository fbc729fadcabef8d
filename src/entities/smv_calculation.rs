use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Denormalized SMV snapshot for a sample. The operations breakdown is an
/// opaque serialized blob, not relationally linked to sample_operations.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "smv_calculations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sample_id: String,
    pub buyer_name: String,
    pub style_name: String,
    pub category: Option<String>,
    pub gauge: Option<String>,
    pub total_smv: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub operations: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
