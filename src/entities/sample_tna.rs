use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Time-and-Action scheduling snapshot keyed by the sample_id string.
/// Deliberately non-unique: set styles produce one row per piece.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sample_tna")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sample_id: String,
    pub buyer_name: String,
    pub style_name: String,
    pub sample_type: String,
    pub sample_description: Option<String>,
    pub item: Option<String>,
    pub gauge: Option<String>,
    pub worksheet_rcv_date: Option<String>,
    pub yarn_rcv_date: Option<String>,
    pub required_date: Option<String>,
    pub color: Option<String>,
    pub piece_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
