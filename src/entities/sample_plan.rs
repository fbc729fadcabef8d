use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Planning snapshot keyed by the sample_id string; at most one row per
/// sample_id (create is a full-replace upsert).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sample_plan")]
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
    pub assigned_designer: Option<String>,
    pub required_sample_quantity: Option<i32>,
    pub round: i32,
    pub notes: Option<String>,
    pub submit_status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
